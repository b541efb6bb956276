//! Custom error types for Beca
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Beca operations
#[derive(Error, Debug)]
pub enum BecaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for data models and expense submissions
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// No credential was configured for the text-generation service
    #[error("No API key configured for the advice service")]
    MissingApiKey,

    /// Transport-level failure talking to the advice service
    #[error("Network error: {0}")]
    Network(String),

    /// The advice service answered with a non-success status
    #[error("Service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    /// The advice service answered with a body we could not use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// An advice request is already pending
    #[error("An advice request is already in progress")]
    AdviceInFlight,
}

impl BecaError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for categories
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from talking to the advice service
    pub fn is_advice_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey
                | Self::Network(_)
                | Self::Service { .. }
                | Self::InvalidResponse(_)
        )
    }
}

impl From<std::io::Error> for BecaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<reqwest::Error> for BecaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for Beca operations
pub type BecaResult<T> = Result<T, BecaError>;
