//! Scenario adapters - Curves from outside the process.
//!
//! - `Scenario` - JSON document with labeled piecewise curves and a selection

mod json_scenario;

pub use json_scenario::{Scenario, ScenarioError};
