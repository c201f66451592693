//! Piecewise-constant cost-effectiveness curve.
//!
//! Between two consecutive breakpoints the optimal policy of an alternative
//! does not change, so cost and effectiveness are constant there. Segment `i`
//! covers the half-open interval `[b(i-1), b(i))`, with `b(-1) = 0` and the
//! last segment extending to +∞.

use serde::{Deserialize, Serialize};

use super::CostEffectivenessCurve;
use crate::domain::foundation::ValidationError;

/// Cost and effectiveness of one constant-structure interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub cost: f64,
    pub effectiveness: f64,
    /// Optional label of the optimal strategy over this interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl CurveSegment {
    /// Creates a segment without a strategy label.
    pub fn new(cost: f64, effectiveness: f64) -> Self {
        Self {
            cost,
            effectiveness,
            strategy: None,
        }
    }

    /// Creates a segment with a strategy label.
    pub fn with_strategy(cost: f64, effectiveness: f64, strategy: impl Into<String>) -> Self {
        Self {
            cost,
            effectiveness,
            strategy: Some(strategy.into()),
        }
    }
}

/// A step curve over the threshold axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiecewiseCurve {
    breakpoints: Vec<f64>,
    segments: Vec<CurveSegment>,
}

impl PiecewiseCurve {
    /// Creates a curve from `k` breakpoints and `k + 1` segments.
    ///
    /// # Errors
    /// - `LengthMismatch` if `segments.len() != breakpoints.len() + 1`
    /// - `NotFinite` for any non-finite breakpoint, cost or effectiveness
    /// - `BelowMinimum` for a breakpoint at or below zero
    /// - `NotIncreasing` if breakpoints are not strictly increasing
    pub fn new(breakpoints: Vec<f64>, segments: Vec<CurveSegment>) -> Result<Self, ValidationError> {
        if segments.len() != breakpoints.len() + 1 {
            return Err(ValidationError::length_mismatch(
                "segments",
                breakpoints.len() + 1,
                segments.len(),
            ));
        }

        for segment in &segments {
            if !segment.cost.is_finite() {
                return Err(ValidationError::not_finite("cost", segment.cost));
            }
            if !segment.effectiveness.is_finite() {
                return Err(ValidationError::not_finite(
                    "effectiveness",
                    segment.effectiveness,
                ));
            }
        }

        let mut previous = 0.0;
        for &breakpoint in &breakpoints {
            if !breakpoint.is_finite() {
                return Err(ValidationError::not_finite("breakpoints", breakpoint));
            }
            if breakpoint <= 0.0 {
                return Err(ValidationError::below_minimum("breakpoints", 0.0, breakpoint));
            }
            if breakpoint <= previous {
                return Err(ValidationError::not_increasing(
                    "breakpoints",
                    previous,
                    breakpoint,
                ));
            }
            previous = breakpoint;
        }

        Ok(Self {
            breakpoints,
            segments,
        })
    }

    /// Creates a curve whose optimal structure never changes.
    pub fn constant(cost: f64, effectiveness: f64) -> Result<Self, ValidationError> {
        Self::new(Vec::new(), vec![CurveSegment::new(cost, effectiveness)])
    }

    /// Returns the segments in threshold order.
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Returns the segment in force at `lambda`.
    pub fn segment_at(&self, lambda: f64) -> &CurveSegment {
        let index = self.breakpoints.partition_point(|b| *b <= lambda);
        // segments.len() == breakpoints.len() + 1, so index is always in range
        &self.segments[index]
    }
}

impl CostEffectivenessCurve for PiecewiseCurve {
    fn cost(&self, lambda: f64) -> f64 {
        self.segment_at(lambda).cost
    }

    fn effectiveness(&self, lambda: f64) -> f64 {
        self.segment_at(lambda).effectiveness
    }

    fn optimal_strategy(&self, lambda: f64) -> Option<&str> {
        self.segment_at(lambda).strategy.as_deref()
    }

    fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }
}
