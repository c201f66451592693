//! FrontierAnalysis - One pass from curves to frontier, ICERs and relative values.
//!
//! Runs the analysis pipeline for a caller-owned selection:
//! - Threshold partition over every alternative of the decision variable
//! - Representative threshold of the selected interval
//! - Efficiency frontier over the active alternatives
//! - ICER tables (against the cheapest member and against the predecessor)
//! - Optional rebasing against a reference alternative
//!
//! The service keeps no state between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    AnalysisError, EfficiencyFrontierSelector, FrontierEntry, FrontierSelection, IcerCalculator,
    IcerEntry, RelativeValueTransform, ThresholdInterval, ThresholdPartition,
    ThresholdPartitioner, UnboundedIntervalPolicy,
};
use crate::domain::curve::Alternative;
use crate::domain::foundation::Threshold;

/// How the caller picks the interval to analyse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalChoice {
    /// Interval by position in the partition.
    Index(usize),
    /// The interval containing this threshold.
    Containing(Threshold),
}

impl Default for IntervalChoice {
    fn default() -> Self {
        IntervalChoice::Index(0)
    }
}

/// Selection state for one analysis pass.
#[derive(Debug, Clone)]
pub struct FrontierRequest<'c> {
    /// Every alternative of the decision variable, in state order.
    pub alternatives: Vec<Alternative<'c>>,
    /// Labels of the alternatives to consider; `None` means all of them.
    pub active: Option<Vec<String>>,
    pub interval: IntervalChoice,
    /// Label of the alternative to rebase values against.
    pub reference: Option<String>,
}

impl<'c> FrontierRequest<'c> {
    /// Request over all alternatives in the first interval.
    pub fn new(alternatives: Vec<Alternative<'c>>) -> Self {
        Self {
            alternatives,
            active: None,
            interval: IntervalChoice::default(),
            reference: None,
        }
    }

    pub fn with_active(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.active = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_interval(mut self, interval: IntervalChoice) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_reference(mut self, label: impl Into<String>) -> Self {
        self.reference = Some(label.into());
        self
    }

    fn find(&self, label: &str) -> Option<Alternative<'c>> {
        self.alternatives.iter().find(|alt| alt.label() == label).copied()
    }
}

/// Result of one analysis pass, as plain data for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierReport {
    pub intervals: Vec<ThresholdInterval>,
    pub selected_index: usize,
    pub selected_interval: ThresholdInterval,
    /// Representative threshold the alternatives were evaluated at.
    pub threshold: Threshold,
    pub selection: FrontierSelection,
    /// ICERs against the first frontier member.
    pub icers: Vec<IcerEntry>,
    /// ICERs against each member's predecessor.
    pub consecutive_icers: Vec<IcerEntry>,
    /// Frontier values rebased on the reference, when one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<Vec<FrontierEntry>>,
}

/// Stateless analysis service.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontierAnalysis {
    policy: UnboundedIntervalPolicy,
}

impl FrontierAnalysis {
    /// Creates a service using the configured unbounded-interval policy.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self::with_policy(config.policy())
    }

    pub fn with_policy(policy: UnboundedIntervalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnboundedIntervalPolicy {
        self.policy
    }

    /// Partition of the threshold axis for the whole decision variable.
    pub fn partition(&self, alternatives: &[Alternative<'_>]) -> ThresholdPartition {
        let partition = ThresholdPartitioner::for_alternatives(alternatives);
        debug!(
            alternatives = alternatives.len(),
            intervals = partition.interval_count(),
            "Computed threshold partition"
        );
        partition
    }

    /// Runs the full pipeline for `request`.
    ///
    /// # Errors
    /// - `IntervalOutOfRange` if the chosen index does not exist
    /// - `UnknownAlternative` if an active label is not an alternative
    /// - `UnknownReference` if the reference label is not an alternative
    /// - `NonRepresentable` if a cost or effectiveness difference overflows f64
    pub fn run(&self, request: &FrontierRequest<'_>) -> Result<FrontierReport, AnalysisError> {
        let partition = self.partition(&request.alternatives);
        let (selected_index, selected_interval) = Self::select_interval(&partition, request.interval)?;
        let threshold =
            Threshold::try_new(selected_interval.representative_threshold(self.policy))?;
        let lambda = threshold.value();

        let candidates = Self::active_candidates(request)?;
        let selection = EfficiencyFrontierSelector::select(&candidates, lambda);
        debug!(
            interval = selected_index,
            lambda,
            candidates = candidates.len(),
            frontier = ?selection.labels(),
            excluded = selection.excluded.len(),
            "Selected efficiency frontier"
        );

        let icers = IcerCalculator::icer_table(&selection.frontier).map_err(|e| {
            warn!(error = %e, table = "reference", "ICER table could not be computed");
            e
        })?;
        let consecutive_icers =
            IcerCalculator::consecutive_icers(&selection.frontier).map_err(|e| {
                warn!(error = %e, table = "consecutive", "ICER table could not be computed");
                e
            })?;

        let relative = match &request.reference {
            Some(label) => {
                let reference = request
                    .find(label)
                    .ok_or_else(|| AnalysisError::UnknownReference(label.clone()))?;
                Some(RelativeValueTransform::to_relative(
                    &selection.frontier,
                    &reference,
                    lambda,
                ))
            }
            None => None,
        };

        Ok(FrontierReport {
            intervals: partition.intervals(),
            selected_index,
            selected_interval,
            threshold,
            selection,
            icers,
            consecutive_icers,
            relative,
        })
    }

    fn select_interval(
        partition: &ThresholdPartition,
        choice: IntervalChoice,
    ) -> Result<(usize, ThresholdInterval), AnalysisError> {
        let index = match choice {
            IntervalChoice::Index(index) => index,
            IntervalChoice::Containing(threshold) => partition
                .interval_containing(threshold.value())
                .unwrap_or_default(),
        };
        partition
            .interval(index)
            .map(|interval| (index, interval))
            .ok_or(AnalysisError::IntervalOutOfRange {
                index,
                count: partition.interval_count(),
            })
    }

    fn active_candidates<'c>(
        request: &FrontierRequest<'c>,
    ) -> Result<Vec<Alternative<'c>>, AnalysisError> {
        match &request.active {
            None => Ok(request.alternatives.clone()),
            Some(labels) => labels
                .iter()
                .map(|label| {
                    request
                        .find(label)
                        .ok_or_else(|| AnalysisError::UnknownAlternative(label.clone()))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ExclusionKind;
    use crate::domain::curve::{CurveSegment, PiecewiseCurve};

    struct Fixture {
        a: PiecewiseCurve,
        b: PiecewiseCurve,
        c: PiecewiseCurve,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                a: PiecewiseCurve::constant(100.0, 2.0).unwrap(),
                b: PiecewiseCurve::new(
                    vec![5.0],
                    vec![
                        CurveSegment::with_strategy(150.0, 3.0, "early"),
                        CurveSegment::with_strategy(150.0, 3.0, "late"),
                    ],
                )
                .unwrap(),
                c: PiecewiseCurve::new(
                    vec![5.0, 10.0],
                    vec![
                        CurveSegment::new(200.0, 2.5),
                        CurveSegment::new(200.0, 2.5),
                        CurveSegment::new(120.0, 4.0),
                    ],
                )
                .unwrap(),
            }
        }

        fn alternatives(&self) -> Vec<Alternative<'_>> {
            vec![
                Alternative::new("A", &self.a),
                Alternative::new("B", &self.b),
                Alternative::new("C", &self.c),
            ]
        }
    }

    #[test]
    fn run_reports_partition_frontier_and_icers() {
        let fixture = Fixture::new();
        let request = FrontierRequest::new(fixture.alternatives());

        let report = FrontierAnalysis::default().run(&request).unwrap();

        assert_eq!(report.intervals.len(), 3);
        assert_eq!(report.selected_index, 0);
        assert_eq!(report.threshold.value(), 2.5);
        assert_eq!(report.selection.labels(), vec!["A", "B"]);
        assert_eq!(report.icers[0], IcerEntry::reference("A"));
        assert_eq!(report.icers[1].value, 50.0);
        assert_eq!(report.consecutive_icers, report.icers);
        assert!(report.relative.is_none());
    }

    #[test]
    fn last_interval_uses_lower_bound_by_default() {
        let fixture = Fixture::new();
        let request =
            FrontierRequest::new(fixture.alternatives()).with_interval(IntervalChoice::Index(2));

        let report = FrontierAnalysis::default().run(&request).unwrap();

        assert_eq!(report.selected_interval.upper, None);
        assert_eq!(report.threshold.value(), 10.0);
        // C becomes cheap and most effective above 10
        assert_eq!(report.selection.labels(), vec!["A", "C"]);
        assert_eq!(report.selection.excluded[0].alternative, "B");
        assert_eq!(report.selection.excluded[0].kind, ExclusionKind::Dominated);
    }

    #[test]
    fn last_interval_respects_finite_cap() {
        let fixture = Fixture::new();
        let request =
            FrontierRequest::new(fixture.alternatives()).with_interval(IntervalChoice::Index(2));

        let report = FrontierAnalysis::new(&AnalysisConfig::with_cap(30.0))
            .run(&request)
            .unwrap();

        assert_eq!(report.threshold.value(), 20.0);
    }

    #[test]
    fn interval_can_be_chosen_by_threshold() {
        let fixture = Fixture::new();
        let threshold = Threshold::try_new(7.0).unwrap();
        let request = FrontierRequest::new(fixture.alternatives())
            .with_interval(IntervalChoice::Containing(threshold));

        let report = FrontierAnalysis::default().run(&request).unwrap();

        assert_eq!(report.selected_index, 1);
        assert_eq!(report.threshold.value(), 7.5);
        assert_eq!(report.selection.frontier[1].strategy.as_deref(), Some("late"));
    }

    #[test]
    fn interval_out_of_range_is_an_error() {
        let fixture = Fixture::new();
        let request =
            FrontierRequest::new(fixture.alternatives()).with_interval(IntervalChoice::Index(3));

        let result = FrontierAnalysis::default().run(&request);

        assert_eq!(
            result,
            Err(AnalysisError::IntervalOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn active_subset_limits_candidates_but_not_partition() {
        let fixture = Fixture::new();
        let request = FrontierRequest::new(fixture.alternatives()).with_active(vec!["B", "C"]);

        let report = FrontierAnalysis::default().run(&request).unwrap();

        assert_eq!(report.intervals.len(), 3);
        assert_eq!(report.selection.labels(), vec!["B"]);
    }

    #[test]
    fn empty_active_subset_gives_empty_results() {
        let fixture = Fixture::new();
        let request = FrontierRequest::new(fixture.alternatives()).with_active(Vec::<String>::new());

        let report = FrontierAnalysis::default().run(&request).unwrap();

        assert!(report.selection.frontier.is_empty());
        assert!(report.icers.is_empty());
        assert!(report.consecutive_icers.is_empty());
    }

    #[test]
    fn unknown_active_label_is_an_error() {
        let fixture = Fixture::new();
        let request = FrontierRequest::new(fixture.alternatives()).with_active(vec!["Z"]);

        let result = FrontierAnalysis::default().run(&request);

        assert_eq!(result, Err(AnalysisError::UnknownAlternative("Z".to_string())));
    }

    #[test]
    fn reference_outside_active_set_rebases_values() {
        let fixture = Fixture::new();
        let request = FrontierRequest::new(fixture.alternatives())
            .with_active(vec!["B"])
            .with_reference("A");

        let report = FrontierAnalysis::default().run(&request).unwrap();

        let relative = report.relative.unwrap();
        assert_eq!(relative.len(), 1);
        assert_eq!(relative[0].cost, 50.0);
        assert_eq!(relative[0].effectiveness, 1.0);
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let fixture = Fixture::new();
        let request = FrontierRequest::new(fixture.alternatives()).with_reference("nobody");

        let result = FrontierAnalysis::default().run(&request);

        assert_eq!(
            result,
            Err(AnalysisError::UnknownReference("nobody".to_string()))
        );
    }

    #[test]
    fn report_serializes_without_infinite_values() {
        let fixture = Fixture::new();
        let request = FrontierRequest::new(fixture.alternatives());

        let report = FrontierAnalysis::default().run(&request).unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"upper\":null"));
        assert!(json.contains("\"threshold\":2.5"));
    }

    #[test]
    fn run_reports_frontiers_beyond_decimal_range() {
        let tiny_low = PiecewiseCurve::constant(1.0, 1e-30).unwrap();
        let tiny_high = PiecewiseCurve::constant(2.0, 3e-30).unwrap();
        let huge_low = PiecewiseCurve::constant(1e29, 1.0).unwrap();
        let huge_high = PiecewiseCurve::constant(2e29, 2.0).unwrap();

        let tiny = FrontierAnalysis::default()
            .run(&FrontierRequest::new(vec![
                Alternative::new("A", &tiny_low),
                Alternative::new("B", &tiny_high),
            ]))
            .unwrap();
        let huge = FrontierAnalysis::default()
            .run(&FrontierRequest::new(vec![
                Alternative::new("A", &huge_low),
                Alternative::new("B", &huge_high),
            ]))
            .unwrap();

        assert_eq!(tiny.selection.labels(), vec!["A", "B"]);
        assert!(tiny.icers[1].value > 0.0 && tiny.icers[1].value.is_finite());
        assert_eq!(tiny.consecutive_icers[1].value, tiny.icers[1].value);
        assert_eq!(huge.icers[1].value, 1e29);
        assert_eq!(huge.consecutive_icers[1].value, 1e29);
    }

    #[test]
    fn run_fails_when_cost_difference_overflows() {
        let cheapest = PiecewiseCurve::constant(-f64::MAX, 1.0).unwrap();
        let dearest = PiecewiseCurve::constant(f64::MAX, 2.0).unwrap();
        let request = FrontierRequest::new(vec![
            Alternative::new("low", &cheapest),
            Alternative::new("high", &dearest),
        ]);

        let result = FrontierAnalysis::default().run(&request);

        assert!(matches!(
            result,
            Err(AnalysisError::NonRepresentable { ref label, value }) if label == "high" && value.is_infinite()
        ));
    }
}
