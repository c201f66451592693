//! Alternative - a decision-state label paired with its curve.

use std::fmt;

use super::CostEffectivenessCurve;

/// One state of the decision variable under analysis.
///
/// Identity is by label. The curve is borrowed from the upstream inference
/// result for the duration of a computation and never mutated.
#[derive(Clone, Copy)]
pub struct Alternative<'c> {
    label: &'c str,
    curve: &'c dyn CostEffectivenessCurve,
}

impl<'c> Alternative<'c> {
    /// Pairs a label with a curve.
    pub fn new(label: &'c str, curve: &'c dyn CostEffectivenessCurve) -> Self {
        Self { label, curve }
    }

    /// Returns the decision-state label.
    pub fn label(&self) -> &'c str {
        self.label
    }

    /// Returns the curve backing this alternative.
    pub fn curve(&self) -> &'c dyn CostEffectivenessCurve {
        self.curve
    }

    pub fn cost(&self, lambda: f64) -> f64 {
        self.curve.cost(lambda)
    }

    pub fn effectiveness(&self, lambda: f64) -> f64 {
        self.curve.effectiveness(lambda)
    }
}

impl PartialEq for Alternative<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Alternative<'_> {}

impl fmt::Debug for Alternative<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alternative")
            .field("label", &self.label)
            .field("curve", &self.curve)
            .finish()
    }
}

impl fmt::Display for Alternative<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
