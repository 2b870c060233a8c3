//! # rulemetrics-core
//!
//! Core types, errors, and tracing bootstrap for the rulemetrics
//! workspace: the trained rule-list model consumed by the statistics
//! engine, the error taxonomy, and shared collections.

pub mod errors;
pub mod model;
pub mod observability;
pub mod types;
