//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
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

    /// Budget-related errors
    #[error("Budget error: {0}")]
    Budget(String),

    /// Currency conversion errors
    #[error("Currency error: {0}")]
    Currency(String),

    /// Exchange rate unavailable after exhausting every source
    #[error("No exchange rate available for {from}->{to}")]
    RateUnavailable { from: String, to: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FintrackError {
    /// Create a "not found" error for budget plans
    pub fn plan_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget plan",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payment plans
    pub fn payment_plan_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payment plan",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payment items
    pub fn payment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payment",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for shopping lists
    pub fn shopping_list_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Shopping list",
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
}

// Implement From traits for common error types

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for FintrackError {
    fn from(err: reqwest::Error) -> Self {
        Self::Currency(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FintrackError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FintrackError::plan_not_found("2025-01");
        assert_eq!(err.to_string(), "Budget plan not found: 2025-01");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rate_unavailable_error() {
        let err = FintrackError::RateUnavailable {
            from: "EUR".into(),
            to: "GBP".into(),
        };
        assert_eq!(err.to_string(), "No exchange rate available for EUR->GBP");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FintrackError = io_err.into();
        assert!(matches!(err, FintrackError::Io(_)));
    }
}
