//! JSON Scenario Adapter - Loads precomputed curves and a selection from JSON.
//!
//! # Format
//!
//! ```json
//! {
//!   "alternatives": [
//!     { "label": "no treatment", "segments": [{ "cost": 0, "effectiveness": 1.0 }] },
//!     {
//!       "label": "surgery",
//!       "breakpoints": [20000],
//!       "segments": [
//!         { "cost": 9000, "effectiveness": 1.2, "strategy": "operate if symptomatic" },
//!         { "cost": 15000, "effectiveness": 1.6, "strategy": "operate always" }
//!       ]
//!     }
//!   ],
//!   "active": ["no treatment", "surgery"],
//!   "reference": "no treatment",
//!   "interval": { "index": 1 }
//! }
//! ```
//!
//! `active`, `reference` and `interval` are optional.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::application::{FrontierRequest, IntervalChoice};
use crate::domain::curve::{Alternative, CurveSegment, PiecewiseCurve};
use crate::domain::foundation::ValidationError;

/// Errors that can occur while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid alternative: {0}")]
    InvalidAlternative(#[source] ValidationError),

    #[error("Alternative '{0}' is defined more than once")]
    DuplicateLabel(String),

    #[error("Invalid curve for alternative '{label}': {source}")]
    InvalidCurve {
        label: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Deserialize)]
struct ScenarioDocument {
    alternatives: Vec<AlternativeDocument>,
    #[serde(default)]
    active: Option<Vec<String>>,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    interval: IntervalChoice,
}

#[derive(Debug, Deserialize)]
struct AlternativeDocument {
    label: String,
    #[serde(default)]
    breakpoints: Vec<f64>,
    segments: Vec<CurveSegment>,
}

/// Labeled curves plus the selection to analyse.
#[derive(Debug, Clone)]
pub struct Scenario {
    curves: Vec<(String, PiecewiseCurve)>,
    pub active: Option<Vec<String>>,
    pub reference: Option<String>,
    pub interval: IntervalChoice,
}

impl Scenario {
    /// Parses and validates a scenario document.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let document: ScenarioDocument = serde_json::from_str(json)?;

        let mut labels = HashSet::new();
        let mut curves = Vec::with_capacity(document.alternatives.len());
        for alternative in document.alternatives {
            if alternative.label.trim().is_empty() {
                return Err(ScenarioError::InvalidAlternative(ValidationError::empty_field(
                    "label",
                )));
            }
            if !labels.insert(alternative.label.clone()) {
                return Err(ScenarioError::DuplicateLabel(alternative.label));
            }
            let curve = PiecewiseCurve::new(alternative.breakpoints, alternative.segments)
                .map_err(|source| ScenarioError::InvalidCurve {
                    label: alternative.label.clone(),
                    source,
                })?;
            curves.push((alternative.label, curve));
        }

        Ok(Self {
            curves,
            active: document.active,
            reference: document.reference,
            interval: document.interval,
        })
    }

    /// Reads and parses a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            alternatives = scenario.curves.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    /// Alternatives in document order, borrowing this scenario's curves.
    pub fn alternatives(&self) -> Vec<Alternative<'_>> {
        self.curves
            .iter()
            .map(|(label, curve)| Alternative::new(label, curve))
            .collect()
    }

    /// Analysis request carrying this scenario's selection.
    pub fn request(&self) -> FrontierRequest<'_> {
        FrontierRequest {
            alternatives: self.alternatives(),
            active: self.active.clone(),
            interval: self.interval,
            reference: self.reference.clone(),
        }
    }
}
