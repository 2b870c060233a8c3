//! # rulemetrics-analysis
//!
//! Statistics engine for trained rule-list models: per-rule support and
//! confidence, a cached case total, and a serializable reporting
//! summary. Everything is derived once at construction and served from
//! cached lookups afterward.

pub mod statistics;
