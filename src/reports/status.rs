//! Per-category budget status
//!
//! Drives the progress bars and colour coding of the category list. It has
//! no effect on ledger behaviour.

use serde::Serialize;
use std::fmt;

use crate::models::{Category, Money};

/// Percentage at which a category is flagged as nearly exhausted
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Percentage at which a category is flagged as exhausted
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// Budget health of a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryStatus {
    Ok,
    Warning,
    Exceeded,
}

impl CategoryStatus {
    /// Classify a (clamped) usage percentage
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCEEDED_THRESHOLD {
            Self::Exceeded
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "Casi agotado"),
            Self::Exceeded => write!(f, "Agotado"),
        }
    }
}

/// Usage figures for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryProgress {
    /// `min(spent / budget * 100, 100)`
    pub percentage: f64,
    /// Budget left, negative when overspent
    pub remaining: Money,
    pub status: CategoryStatus,
}

impl CategoryProgress {
    /// Compute the progress of a category
    ///
    /// A zero budget counts as fully used as soon as anything is spent, and
    /// as unused otherwise.
    pub fn of(category: &Category) -> Self {
        let percentage = match category.spent.percentage_of(category.budget) {
            Some(pct) => pct.min(EXCEEDED_THRESHOLD),
            None if category.spent.is_positive() => EXCEEDED_THRESHOLD,
            None => 0.0,
        };

        Self {
            percentage,
            remaining: category.remaining(),
            status: CategoryStatus::from_percentage(percentage),
        }
    }
}

/// Shorthand for `CategoryProgress::of(category).status`
pub fn category_status(category: &Category) -> CategoryStatus {
    CategoryProgress::of(category).status
}
