//! Reports module for Beca
//!
//! Derived views over the ledger: aggregate totals, chart projections and
//! per-category budget status.

pub mod breakdown;
pub mod stats;
pub mod status;

pub use breakdown::{budget_comparison, category_breakdown, BreakdownEntry};
pub use stats::Stats;
pub use status::{category_status, CategoryProgress, CategoryStatus};
