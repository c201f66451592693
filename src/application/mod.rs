//! Application layer - Orchestration of the analysis services.
//!
//! This layer composes the pure domain services into one analysis pass and
//! adds logging. It holds no session state; callers pass their selection on
//! every call.

mod frontier_analysis;

pub use frontier_analysis::{FrontierAnalysis, FrontierReport, FrontierRequest, IntervalChoice};
