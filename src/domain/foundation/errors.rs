//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite number, got {actual}")]
    NotFinite { field: String, actual: f64 },

    #[error("Field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum {
        field: String,
        min: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be strictly increasing, got {previous} followed by {next}")]
    NotIncreasing {
        field: String,
        previous: f64,
        next: f64,
    },

    #[error("Field '{field}' expected {expected} entries, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-finite value validation error.
    pub fn not_finite(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
            actual,
        }
    }

    /// Creates a below-minimum validation error.
    pub fn below_minimum(field: impl Into<String>, min: f64, actual: f64) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates a not-increasing validation error.
    pub fn not_increasing(field: impl Into<String>, previous: f64, next: f64) -> Self {
        ValidationError::NotIncreasing {
            field: field.into(),
            previous,
            next,
        }
    }

    /// Creates a length mismatch validation error.
    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::NotIncreasing { field, .. }
            | ValidationError::LengthMismatch { field, .. } => field,
        }
    }
}
