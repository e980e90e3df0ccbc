//! Adapters - infrastructure implementations of the ports.
//!
//! # Module Organization
//!
//! - `store` - In-memory stores and the JSON knowledge-file loader
//! - `http` - axum routers exposing the service API

pub mod http;
pub mod store;

pub use store::{
    load_knowledge, InMemoryConsultationStore, InMemoryRuleStore, InMemoryVisaTypeDirectory,
    KnowledgeFiles,
};
