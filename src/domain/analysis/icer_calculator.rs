//! ICER Calculator - Incremental cost-effectiveness ratios over a frontier.
//!
//! Cost and effectiveness differences are taken in decimal arithmetic so that
//! values like `0.3 - 0.1` do not pick up binary representation error. Values
//! the decimal type cannot hold exactly fall back to f64 subtraction. The
//! final division always happens in f64.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AnalysisError, FrontierEntry};

/// Incremental cost-effectiveness ratio between two alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcerEntry {
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl IcerEntry {
    /// The zero ICER of an alternative against itself.
    pub fn reference(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            from: label.clone(),
            to: label,
            value: 0.0,
        }
    }
}

/// ICER computations over an ordered frontier.
pub struct IcerCalculator;

impl IcerCalculator {
    /// ICER of every frontier member against the first (cheapest) member.
    ///
    /// Entry 0 is always the reference with value 0.
    ///
    /// # Errors
    /// - `UndefinedIcer` if a member has the reference's effectiveness
    /// - `NonRepresentable` if a value or difference is not finite
    pub fn icer_table(frontier: &[FrontierEntry]) -> Result<Vec<IcerEntry>, AnalysisError> {
        let Some(reference) = frontier.first() else {
            return Ok(Vec::new());
        };

        let mut table = Vec::with_capacity(frontier.len());
        table.push(IcerEntry::reference(&reference.alternative));
        for entry in &frontier[1..] {
            table.push(IcerEntry {
                from: reference.alternative.clone(),
                to: entry.alternative.clone(),
                value: Self::incremental_ratio(reference, entry)?,
            });
        }
        Ok(table)
    }

    /// ICER of every frontier member against its immediate predecessor.
    ///
    /// Entry 0 is the reference with value 0, as in [`Self::icer_table`].
    pub fn consecutive_icers(frontier: &[FrontierEntry]) -> Result<Vec<IcerEntry>, AnalysisError> {
        let Some(first) = frontier.first() else {
            return Ok(Vec::new());
        };

        let mut table = Vec::with_capacity(frontier.len());
        table.push(IcerEntry::reference(&first.alternative));
        for pair in frontier.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            table.push(IcerEntry {
                from: from.alternative.clone(),
                to: to.alternative.clone(),
                value: Self::incremental_ratio(from, to)?,
            });
        }
        Ok(table)
    }

    /// `(cost(to) − cost(from)) / (effectiveness(to) − effectiveness(from))`.
    ///
    /// # Errors
    /// - `UndefinedIcer` if both entries have the same effectiveness
    /// - `NonRepresentable` if a value or difference is not finite
    pub fn incremental_ratio(from: &FrontierEntry, to: &FrontierEntry) -> Result<f64, AnalysisError> {
        if to.effectiveness == from.effectiveness {
            return Err(AnalysisError::UndefinedIcer {
                from: from.alternative.clone(),
                to: to.alternative.clone(),
                effectiveness: to.effectiveness,
            });
        }

        let delta_cost = Self::difference(&to.alternative, to.cost, from.cost)?;
        let delta_effectiveness =
            Self::difference(&to.alternative, to.effectiveness, from.effectiveness)?;
        Ok(delta_cost / delta_effectiveness)
    }

    /// `minuend − subtrahend`, exact in decimal when both operands survive
    /// the round trip through `Decimal`, plain f64 otherwise.
    fn difference(label: &str, minuend: f64, subtrahend: f64) -> Result<f64, AnalysisError> {
        for value in [minuend, subtrahend] {
            if !value.is_finite() {
                return Err(AnalysisError::NonRepresentable {
                    label: label.to_string(),
                    value,
                });
            }
        }

        let delta = match (Self::to_decimal(minuend), Self::to_decimal(subtrahend)) {
            (Some(a), Some(b)) => a
                .checked_sub(b)
                .and_then(|d| d.to_f64())
                .unwrap_or(minuend - subtrahend),
            _ => minuend - subtrahend,
        };

        if delta.is_finite() {
            Ok(delta)
        } else {
            Err(AnalysisError::NonRepresentable {
                label: label.to_string(),
                value: delta,
            })
        }
    }

    /// Lossless conversion only; values outside the decimal range or below
    /// its 28-digit scale yield None.
    fn to_decimal(value: f64) -> Option<Decimal> {
        Decimal::from_f64(value).filter(|d| d.to_f64() == Some(value))
    }
}
