//! Curve module - Read-only access to cost-effectiveness curves.
//!
//! The analysis services are polymorphic only over [`CostEffectivenessCurve`];
//! how an upstream engine represents its result stays behind that trait.
//! [`PiecewiseCurve`] is the step-function representation used by the
//! scenario adapter and the tests.

mod alternative;
mod contract;
mod piecewise;

pub use alternative::Alternative;
pub use contract::CostEffectivenessCurve;
pub use piecewise::{CurveSegment, PiecewiseCurve};
