//! Category model
//!
//! A category is a named spending bucket with a budget ceiling and the amount
//! spent against it so far.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique slug
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display glyph (usually a single emoji)
    pub emoji: String,

    /// Budget ceiling for the whole grant period
    pub budget: Money,

    /// Sum of all transactions recorded against this category
    pub spent: Money,
}

impl Category {
    /// Create a new category with nothing spent
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        emoji: impl Into<String>,
        budget: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: emoji.into(),
            budget,
            spent: Money::zero(),
        }
    }

    /// Set the spent amount (used when seeding)
    pub fn with_spent(mut self, spent: Money) -> Self {
        self.spent = spent;
        self
    }

    /// Budget left in this category; negative once overspent
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.id.is_empty() {
            return Err(CategoryValidationError::EmptyId);
        }

        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if self.budget.is_negative() {
            return Err(CategoryValidationError::NegativeBudget);
        }

        if self.spent.is_negative() {
            return Err(CategoryValidationError::NegativeSpent);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyId,
    EmptyName,
    NameTooLong(usize),
    NegativeBudget,
    NegativeSpent,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Category id cannot be empty"),
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NegativeBudget => write!(f, "Budget cannot be negative"),
            Self::NegativeSpent => write!(f, "Spent amount cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("gym", "Gym", "🏋️", Money::from_cents(8000));

        assert_eq!(category.id.as_str(), "gym");
        assert_eq!(category.name, "Gym");
        assert!(category.spent.is_zero());
        assert_eq!(category.remaining(), Money::from_cents(8000));
    }

    #[test]
    fn test_remaining_goes_negative() {
        let category = Category::new("ocio", "Ocio", "🎉", Money::from_cents(6000))
            .with_spent(Money::from_cents(7500));
        assert_eq!(category.remaining(), Money::from_cents(-1500));
    }

    #[test]
    fn test_category_validation() {
        let mut category = Category::new("ropa", "Ropa", "👕", Money::from_cents(60000));
        assert!(category.validate().is_ok());

        category.name = "  ".to_string();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));

        category.name = "Ropa".to_string();
        category.budget = Money::from_cents(-1);
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NegativeBudget)
        );

        category.budget = Money::zero();
        category.spent = Money::from_cents(-1);
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NegativeSpent)
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        let category = Category::new(" ", "Nada", "❓", Money::zero());
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyId));
    }

    #[test]
    fn test_display() {
        let category = Category::new("otros", "Otros", "❓", Money::from_cents(10000));
        assert_eq!(category.to_string(), "❓ Otros");
    }
}
