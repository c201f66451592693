//! Adapters - Connections between the analysis core and the outside world.
//!
//! - `scenario` - Loading precomputed curves from JSON documents

pub mod scenario;

pub use scenario::{Scenario, ScenarioError};
