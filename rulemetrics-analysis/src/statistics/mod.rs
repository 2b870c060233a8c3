//! Rule statistics — support and confidence per rule.
//!
//! Consumed by reporting and visualization layers, either through the
//! borrowing query object or the owned `StatisticsSummary` snapshot.

pub mod engine;
pub mod summary;
pub mod types;

pub use engine::RuleStatistics;
pub use summary::{RuleSummary, StatisticsSummary};
pub use types::{RuleId, RuleMetrics, StatisticsConfig, ZeroCasePolicy};
