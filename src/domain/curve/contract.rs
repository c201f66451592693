//! Capability interface for cost-effectiveness curves.

use std::fmt;

/// A per-alternative function of the willingness-to-pay threshold λ.
///
/// Curves are produced by upstream inference and only read here. Implementors
/// guarantee that `cost` and `effectiveness` are defined for every λ ≥ 0 and
/// that `breakpoints` is finite and strictly increasing.
///
/// `breakpoints()` is empty iff `interval_count() == 1`.
pub trait CostEffectivenessCurve: fmt::Debug {
    /// Cost of the alternative's optimal policy at `lambda`.
    fn cost(&self, lambda: f64) -> f64;

    /// Effectiveness of the alternative's optimal policy at `lambda`.
    fn effectiveness(&self, lambda: f64) -> f64;

    /// Label of the optimal strategy at `lambda`, when the producer tracks one.
    fn optimal_strategy(&self, _lambda: f64) -> Option<&str> {
        None
    }

    /// Thresholds at which the represented optimal structure changes.
    fn breakpoints(&self) -> &[f64];

    /// Number of constant-structure intervals the curve spans.
    fn interval_count(&self) -> usize {
        self.breakpoints().len() + 1
    }
}
