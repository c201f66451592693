//! Efficiency Frontier Selector - Non-dominated frontier at one threshold.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::curve::Alternative;

/// An alternative evaluated at a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierEntry {
    pub alternative: String,
    pub cost: f64,
    pub effectiveness: f64,
    /// Optimal strategy of the alternative at the evaluation threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl FrontierEntry {
    /// Creates an entry from already evaluated values.
    pub fn new(alternative: impl Into<String>, cost: f64, effectiveness: f64) -> Self {
        Self {
            alternative: alternative.into(),
            cost,
            effectiveness,
            strategy: None,
        }
    }

    /// Evaluates `alternative`'s curve at `lambda`.
    pub fn evaluate(alternative: &Alternative<'_>, lambda: f64) -> Self {
        let curve = alternative.curve();
        Self {
            alternative: alternative.label().to_string(),
            cost: curve.cost(lambda),
            effectiveness: curve.effectiveness(lambda),
            strategy: curve.optimal_strategy(lambda).map(str::to_string),
        }
    }

    /// Net monetary benefit `λ·effectiveness − cost`.
    pub fn net_monetary_benefit(&self, lambda: f64) -> f64 {
        lambda * self.effectiveness - self.cost
    }
}

/// Why an alternative was left off the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionKind {
    /// At least as costly and no more effective than a frontier member.
    Dominated,
    /// Cheaper than the frontier member that removed it, but no more effective.
    ExtendedDominance,
}

/// A candidate that did not make the frontier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedAlternative {
    pub alternative: String,
    /// The champion whose effectiveness it failed to exceed.
    pub excluded_by: String,
    pub kind: ExclusionKind,
}

impl ExcludedAlternative {
    fn against(entry: FrontierEntry, champion: &FrontierEntry) -> Self {
        let kind = if entry.cost >= champion.cost {
            ExclusionKind::Dominated
        } else {
            ExclusionKind::ExtendedDominance
        };
        Self {
            alternative: entry.alternative,
            excluded_by: champion.alternative.clone(),
            kind,
        }
    }
}

/// Frontier plus the bookkeeping of what was excluded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontierSelection {
    /// Threshold the candidates were evaluated at.
    pub threshold: f64,
    /// Ordered by strictly increasing cost and effectiveness.
    pub frontier: Vec<FrontierEntry>,
    /// In order of exclusion.
    pub excluded: Vec<ExcludedAlternative>,
}

impl FrontierSelection {
    /// Returns true if `label` is on the frontier.
    pub fn contains(&self, label: &str) -> bool {
        self.frontier.iter().any(|e| e.alternative == label)
    }

    /// Frontier labels in frontier order.
    pub fn labels(&self) -> Vec<&str> {
        self.frontier.iter().map(|e| e.alternative.as_str()).collect()
    }
}

/// Greedy two-phase walk over the candidates.
pub struct EfficiencyFrontierSelector;

impl EfficiencyFrontierSelector {
    /// Computes the ordered non-dominated frontier at `lambda`.
    pub fn select_frontier(candidates: &[Alternative<'_>], lambda: f64) -> Vec<FrontierEntry> {
        Self::select(candidates, lambda).frontier
    }

    /// Computes the frontier and records every excluded candidate.
    ///
    /// # Algorithm
    /// 1. Seed with the cheapest candidate (most effective among cost ties).
    /// 2. Drop every remaining candidate not more effective than the champion.
    /// 3. Promote the candidate with the smallest ICER against the champion
    ///    (least effective among ICER ties) and repeat from 2.
    ///
    /// # Edge Cases
    /// - No candidates: empty frontier
    /// - Single candidate: frontier of that candidate
    /// - Repeated labels: only the first occurrence is considered
    /// - Exact duplicates (same cost and effectiveness): the earlier one wins
    pub fn select(candidates: &[Alternative<'_>], lambda: f64) -> FrontierSelection {
        let mut seen = HashSet::new();
        let mut pool: Vec<FrontierEntry> = candidates
            .iter()
            .filter(|alt| seen.insert(alt.label()))
            .map(|alt| FrontierEntry::evaluate(alt, lambda))
            .collect();

        let mut selection = FrontierSelection {
            threshold: lambda,
            ..FrontierSelection::default()
        };

        let Some(seed) = Self::position_of_min(&pool, Self::cheapest_first) else {
            return selection;
        };
        selection.frontier.push(pool.remove(seed));

        while !pool.is_empty() {
            let champion = match selection.frontier.last() {
                Some(champion) => champion,
                None => break,
            };

            let (improving, dominated): (Vec<_>, Vec<_>) = pool
                .into_iter()
                .partition(|entry| entry.effectiveness > champion.effectiveness);
            selection.excluded.extend(
                dominated
                    .into_iter()
                    .map(|entry| ExcludedAlternative::against(entry, champion)),
            );
            pool = improving;

            let next = Self::position_of_min(&pool, |a, b| {
                Self::incremental_ratio(champion, a)
                    .total_cmp(&Self::incremental_ratio(champion, b))
                    .then_with(|| a.effectiveness.total_cmp(&b.effectiveness))
            });
            match next {
                Some(index) => selection.frontier.push(pool.remove(index)),
                None => break,
            }
        }

        selection
    }

    /// Lowest cost first; among equal costs the most effective.
    fn cheapest_first(a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
        a.cost
            .total_cmp(&b.cost)
            .then_with(|| b.effectiveness.total_cmp(&a.effectiveness))
    }

    /// ICER used to rank candidates. Callers ensure `to` is more effective.
    fn incremental_ratio(from: &FrontierEntry, to: &FrontierEntry) -> f64 {
        (to.cost - from.cost) / (to.effectiveness - from.effectiveness)
    }

    /// Index of the first minimum under `compare`.
    fn position_of_min<F>(pool: &[FrontierEntry], mut compare: F) -> Option<usize>
    where
        F: FnMut(&FrontierEntry, &FrontierEntry) -> Ordering,
    {
        pool.iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| compare(*a, *b))
            .map(|(index, _)| index)
    }
}
