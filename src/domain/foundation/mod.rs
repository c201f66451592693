//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! cost-effectiveness domain.

mod errors;
mod threshold;

pub use errors::ValidationError;
pub use threshold::Threshold;
