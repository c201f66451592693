//! CEA Frontier - Cost-effectiveness frontier and threshold-partition engine
//!
//! This crate consumes precomputed cost-effectiveness curves, one per decision
//! alternative, and produces the threshold partition, the efficiency frontier
//! and the ICER tables as plain data.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
