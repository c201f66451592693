//! Relative Value Transform - Rebase values against a reference alternative.

use super::FrontierEntry;
use crate::domain::curve::Alternative;

/// Rebases cost and effectiveness for relative display.
///
/// Frontier membership and ordering are untouched; only the values change.
pub struct RelativeValueTransform;

impl RelativeValueTransform {
    /// The reference alternative evaluated at `lambda`.
    ///
    /// The reference does not need to be among the displayed entries.
    pub fn base_point(reference: &Alternative<'_>, lambda: f64) -> FrontierEntry {
        FrontierEntry::evaluate(reference, lambda)
    }

    /// Subtracts the reference's cost and effectiveness from every entry.
    pub fn to_relative(
        entries: &[FrontierEntry],
        reference: &Alternative<'_>,
        lambda: f64,
    ) -> Vec<FrontierEntry> {
        let base = Self::base_point(reference, lambda);
        entries
            .iter()
            .map(|entry| FrontierEntry {
                cost: entry.cost - base.cost,
                effectiveness: entry.effectiveness - base.effectiveness,
                ..entry.clone()
            })
            .collect()
    }
}
