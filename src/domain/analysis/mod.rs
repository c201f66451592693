//! Analysis Module - Pure domain services for cost-effectiveness analysis.
//!
//! This module contains stateless functions that operate on cost-effectiveness
//! curves to partition the threshold axis and select efficient alternatives.
//!
//! # Components
//!
//! - `ThresholdPartitioner` - Merges curve breakpoints into intervals of λ
//! - `EfficiencyFrontierSelector` - Non-dominated frontier at one threshold
//! - `IcerCalculator` - Incremental cost-effectiveness ratios, decimal-exact differences
//! - `RelativeValueTransform` - Rebasing against a reference alternative
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Curves are borrowed
//! for the duration of a call and never mutated; results are plain values.

mod errors;
mod frontier_selector;
mod icer_calculator;
mod relative_values;
mod threshold_partition;

pub use errors::AnalysisError;
pub use frontier_selector::{
    EfficiencyFrontierSelector, ExcludedAlternative, ExclusionKind, FrontierEntry,
    FrontierSelection,
};
pub use icer_calculator::{IcerCalculator, IcerEntry};
pub use relative_values::RelativeValueTransform;
pub use threshold_partition::{
    ThresholdInterval, ThresholdPartition, ThresholdPartitioner, UnboundedIntervalPolicy,
};
