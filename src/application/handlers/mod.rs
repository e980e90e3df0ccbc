//! Command and query handlers, one per exposed operation.
//!
//! # Module Organization
//!
//! - `consultation` - start / answer / back / restart / state
//! - `rules` - rule authoring: list, create, update, delete, reorder,
//!   auto-organize, validate
//! - `visa_types` - visa type directory operations

pub mod consultation;
pub mod rules;
pub mod visa_types;
