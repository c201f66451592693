//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::UnboundedIntervalPolicy;

/// Which representative threshold to use for the last, unbounded interval
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnboundedPolicyKind {
    #[default]
    LowerBound,
    FiniteCap,
}

/// Analysis configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Policy for the unbounded interval `[b_k, +∞)`
    #[serde(default)]
    pub unbounded_policy: UnboundedPolicyKind,

    /// Upper cap used by the `finite_cap` policy
    #[serde(default)]
    pub threshold_cap: Option<f64>,
}

impl AnalysisConfig {
    /// Config for an explicit finite cap
    pub fn with_cap(cap: f64) -> Self {
        Self {
            unbounded_policy: UnboundedPolicyKind::FiniteCap,
            threshold_cap: Some(cap),
        }
    }

    /// Resolve the domain policy
    ///
    /// Call [`AnalysisConfig::validate`] first; a `finite_cap` policy without
    /// a cap resolves to the lower-bound policy.
    pub fn policy(&self) -> UnboundedIntervalPolicy {
        match (self.unbounded_policy, self.threshold_cap) {
            (UnboundedPolicyKind::FiniteCap, Some(cap)) => UnboundedIntervalPolicy::FiniteCap { cap },
            _ => UnboundedIntervalPolicy::LowerBound,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.unbounded_policy == UnboundedPolicyKind::FiniteCap {
            let cap = self
                .threshold_cap
                .ok_or(ValidationError::MissingRequired("ANALYSIS__THRESHOLD_CAP"))?;
            if !cap.is_finite() || cap <= 0.0 {
                return Err(ValidationError::InvalidThresholdCap(cap));
            }
        }
        Ok(())
    }
}
