//! Willingness-to-pay threshold value object (λ).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite, non-negative willingness-to-pay threshold.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// λ = 0, the lower end of every partition.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Threshold, returning error if negative or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("threshold", value));
        }
        if value < 0.0 {
            return Err(ValidationError::below_minimum("threshold", 0.0, value));
        }
        // Normalizes -0.0.
        Ok(Self(value + 0.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "λ={}", self.0)
    }
}
