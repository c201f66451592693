//! Error types for cost-effectiveness analysis.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors that can occur while analysing a set of alternatives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("ICER from '{from}' to '{to}' is undefined: both have effectiveness {effectiveness}")]
    UndefinedIcer {
        from: String,
        to: String,
        effectiveness: f64,
    },

    #[error("Value {value} of '{label}' is not a finite number")]
    NonRepresentable { label: String, value: f64 },

    #[error("Interval {index} does not exist (partition has {count} intervals)")]
    IntervalOutOfRange { index: usize, count: usize },

    #[error("Reference alternative '{0}' is not part of the analysis")]
    UnknownReference(String),

    #[error("Alternative '{0}' is not part of the analysis")]
    UnknownAlternative(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(#[from] ValidationError),
}
