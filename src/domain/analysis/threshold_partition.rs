//! Threshold Partitioner - Merges curve breakpoints into one partition of λ.

use serde::{Deserialize, Serialize};

use crate::domain::curve::{Alternative, CostEffectivenessCurve};

/// How to pick a representative λ for the last, unbounded interval.
///
/// The midpoint of `[lower, +∞)` is infinite, so an explicit finite choice
/// is required.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnboundedIntervalPolicy {
    /// Evaluate at the interval's lower bound.
    #[default]
    LowerBound,
    /// Treat `cap` as the upper bound and take the midpoint.
    /// A cap at or below the lower bound falls back to the lower bound.
    FiniteCap { cap: f64 },
}

/// One half-open interval `[lower, upper)` of the threshold axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdInterval {
    pub lower: f64,
    /// `None` means +∞.
    pub upper: Option<f64>,
}

impl ThresholdInterval {
    /// Returns true if the interval has a finite upper bound.
    pub fn is_bounded(&self) -> bool {
        self.upper.is_some()
    }

    /// Returns true if `lambda` lies in `[lower, upper)`.
    pub fn contains(&self, lambda: f64) -> bool {
        lambda >= self.lower && self.upper.map_or(true, |upper| lambda < upper)
    }

    /// Representative threshold: the midpoint for bounded intervals, the
    /// policy's finite choice for the unbounded one.
    pub fn representative_threshold(&self, policy: UnboundedIntervalPolicy) -> f64 {
        match (self.upper, policy) {
            (Some(upper), _) => self.lower + (upper - self.lower) / 2.0,
            (None, UnboundedIntervalPolicy::LowerBound) => self.lower,
            (None, UnboundedIntervalPolicy::FiniteCap { cap }) => {
                if cap.is_finite() && cap > self.lower {
                    self.lower + (cap - self.lower) / 2.0
                } else {
                    self.lower
                }
            }
        }
    }
}

/// Sorted, distinct breakpoints splitting `[0, +∞)` into `k + 1` intervals.
///
/// Only [`ThresholdPartitioner`] builds non-trivial partitions, so the
/// ordering invariant always holds. Serialize-only for that reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThresholdPartition {
    breakpoints: Vec<f64>,
}

impl ThresholdPartition {
    /// The single interval `[0, +∞)`.
    pub fn trivial() -> Self {
        Self::default()
    }

    /// Interior breakpoints, ascending.
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn interval_count(&self) -> usize {
        self.breakpoints.len() + 1
    }

    /// Returns the interval at `index`, or None if out of range.
    pub fn interval(&self, index: usize) -> Option<ThresholdInterval> {
        if index > self.breakpoints.len() {
            return None;
        }
        let lower = if index == 0 {
            0.0
        } else {
            self.breakpoints[index - 1]
        };
        Some(ThresholdInterval {
            lower,
            upper: self.breakpoints.get(index).copied(),
        })
    }

    /// All intervals in ascending order. Together they cover `[0, +∞)`.
    pub fn intervals(&self) -> Vec<ThresholdInterval> {
        (0..self.interval_count())
            .filter_map(|index| self.interval(index))
            .collect()
    }

    /// Index of the interval containing `lambda`.
    /// Returns None for negative or NaN thresholds.
    pub fn interval_containing(&self, lambda: f64) -> Option<usize> {
        if lambda.is_nan() || lambda < 0.0 {
            return None;
        }
        Some(self.breakpoints.partition_point(|b| *b <= lambda))
    }
}

/// Builds the threshold partition shared by all participating curves.
pub struct ThresholdPartitioner;

impl ThresholdPartitioner {
    /// Collects every breakpoint of every curve into one sorted partition.
    ///
    /// # Edge Cases
    /// - Empty input or only single-interval curves: `[0, +∞)`
    /// - Equal breakpoints from different curves collapse to one point
    /// - Breakpoints that are non-finite or `<= 0` are ignored
    pub fn partition(curves: &[&dyn CostEffectivenessCurve]) -> ThresholdPartition {
        Self::merge(curves.iter().copied())
    }

    /// Partition over the curves backing `alternatives`.
    pub fn for_alternatives(alternatives: &[Alternative<'_>]) -> ThresholdPartition {
        Self::merge(alternatives.iter().map(|alt| alt.curve()))
    }

    fn merge<'a>(curves: impl Iterator<Item = &'a dyn CostEffectivenessCurve>) -> ThresholdPartition {
        let mut breakpoints: Vec<f64> = curves
            .filter(|curve| curve.interval_count() > 1)
            .flat_map(|curve| curve.breakpoints().iter().copied())
            .filter(|b| b.is_finite() && *b > 0.0)
            .collect();

        breakpoints.sort_by(f64::total_cmp);
        breakpoints.dedup();

        ThresholdPartition { breakpoints }
    }
}
