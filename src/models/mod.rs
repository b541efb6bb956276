//! Core data models for Beca
//!
//! This module contains the data structures that represent the budgeting
//! domain: categories, transactions, identifiers and money.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryValidationError};
pub use ids::{CategoryId, TransactionId};
pub use money::{Money, MoneyParseError, CURRENCY_SYMBOL};
pub use transaction::{Transaction, TransactionValidationError};
