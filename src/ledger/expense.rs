//! Expense submissions
//!
//! Raw form input as typed by the user, and its validated counterpart.

use crate::error::{BecaError, BecaResult};
use crate::models::{CategoryId, Money};

/// Unparsed expense input straight from the add-expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl ExpenseForm {
    /// Create a form from its three raw fields
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Parse and validate the raw fields
    pub fn parse(&self) -> BecaResult<ExpenseInput> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(BecaError::Validation("Description cannot be empty".into()));
        }

        let category_id = CategoryId::new(self.category.as_str());
        if category_id.is_empty() {
            return Err(BecaError::Validation("A category is required".into()));
        }

        let amount_str = self.amount.trim();
        if amount_str.is_empty() {
            return Err(BecaError::Validation("An amount is required".into()));
        }
        let amount = Money::parse(amount_str)
            .map_err(|e| BecaError::Validation(e.to_string()))?;

        Ok(ExpenseInput {
            description: description.to_string(),
            category_id,
            amount,
        })
    }
}

/// A parsed expense, ready to be recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub description: String,
    pub category_id: CategoryId,
    pub amount: Money,
}
