//! Visa Advisor - Rule-Driven Visa Eligibility Diagnosis
//!
//! This crate implements an interactive consultation service that determines
//! which visa categories an applicant may qualify for by evaluating a
//! versioned rule base against the applicant's answers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
