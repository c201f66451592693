//! Domain layer containing the cost-effectiveness logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (threshold value object, errors)
//! - `curve` - Curve capability trait, piecewise curves, alternatives
//! - `analysis` - Pure domain services (partition, frontier, ICERs, relative values)

pub mod analysis;
pub mod curve;
pub mod foundation;
