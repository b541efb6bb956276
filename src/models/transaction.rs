//! Transaction model
//!
//! A transaction is one recorded expense tied to exactly one category.
//! Transactions are immutable once created.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Category this expense was charged to
    pub category_id: CategoryId,

    /// Amount spent (always positive)
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category_id: CategoryId,
        amount: Money,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            category_id,
            amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category_id.is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) -{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category_id,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::MissingCategory => write!(f, "A category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
