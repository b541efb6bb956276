//! Beca - terminal dashboard for a student grant budget
//!
//! Tracks spending against a fixed set of budget categories and can ask a
//! generative-text service for a short review of the budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings read from the environment
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions)
//! - `ledger`: The in-memory budget ledger and expense submissions
//! - `reports`: Totals, chart data and per-category status
//! - `advisor`: Prompt building, the text-generation client and request state
//! - `display`: Plain-text formatting
//! - `logging`: Tracing setup
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use beca_cli::ledger::Ledger;
//! use beca_cli::models::{CategoryId, Money};
//!
//! let mut ledger = Ledger::seeded()?;
//! ledger.record_expense("Coffee", &CategoryId::from("comida"), Money::from_cents(350))?;
//! assert_eq!(ledger.stats().total_spent, Money::from_cents(6_645));
//! ```

pub mod advisor;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod tui;

pub use error::{BecaError, BecaResult};
