//! End-to-end scenarios: curves in, partition / frontier / ICERs out.

use cea_frontier::adapters::Scenario;
use cea_frontier::application::{FrontierAnalysis, FrontierRequest, IntervalChoice};
use cea_frontier::domain::analysis::{
    EfficiencyFrontierSelector, FrontierEntry, IcerCalculator, IcerEntry, ThresholdInterval,
    ThresholdPartitioner,
};
use cea_frontier::domain::curve::{Alternative, CostEffectivenessCurve, CurveSegment, PiecewiseCurve};

fn constant(cost: f64, effectiveness: f64) -> PiecewiseCurve {
    PiecewiseCurve::constant(cost, effectiveness).unwrap()
}

fn curve_with_breakpoints(breakpoints: &[f64]) -> PiecewiseCurve {
    let segments = (0..=breakpoints.len())
        .map(|i| CurveSegment::new(10.0 * i as f64, i as f64))
        .collect();
    PiecewiseCurve::new(breakpoints.to_vec(), segments).unwrap()
}

#[test]
fn scenario_a_extended_dominance() {
    let a = constant(100.0, 2.0);
    let b = constant(150.0, 3.0);
    let c = constant(200.0, 2.5);
    let candidates = [
        Alternative::new("A", &a),
        Alternative::new("B", &b),
        Alternative::new("C", &c),
    ];

    let frontier = EfficiencyFrontierSelector::select_frontier(&candidates, 1.0);
    let icers = IcerCalculator::icer_table(&frontier).unwrap();

    assert_eq!(
        frontier,
        vec![
            FrontierEntry::new("A", 100.0, 2.0),
            FrontierEntry::new("B", 150.0, 3.0),
        ]
    );
    assert_eq!(
        icers,
        vec![
            IcerEntry::reference("A"),
            IcerEntry {
                from: "A".to_string(),
                to: "B".to_string(),
                value: 50.0,
            },
        ]
    );
}

#[test]
fn scenario_b_single_alternative() {
    let x = constant(80.0, 1.0);

    let frontier = EfficiencyFrontierSelector::select_frontier(&[Alternative::new("X", &x)], 0.0);
    let icers = IcerCalculator::icer_table(&frontier).unwrap();

    assert_eq!(frontier, vec![FrontierEntry::new("X", 80.0, 1.0)]);
    assert_eq!(icers, vec![IcerEntry::reference("X")]);
}

#[test]
fn scenario_c_empty_candidates() {
    let frontier = EfficiencyFrontierSelector::select_frontier(&[], 0.0);
    let icers = IcerCalculator::icer_table(&frontier).unwrap();

    assert!(frontier.is_empty());
    assert!(icers.is_empty());
}

#[test]
fn scenario_d_partition_of_three_curves() {
    let first = curve_with_breakpoints(&[5.0]);
    let second = curve_with_breakpoints(&[]);
    let third = curve_with_breakpoints(&[5.0, 10.0]);
    let curves: [&dyn CostEffectivenessCurve; 3] = [&first, &second, &third];

    let partition = ThresholdPartitioner::partition(&curves);

    assert_eq!(
        partition.intervals(),
        vec![
            ThresholdInterval { lower: 0.0, upper: Some(5.0) },
            ThresholdInterval { lower: 5.0, upper: Some(10.0) },
            ThresholdInterval { lower: 10.0, upper: None },
        ]
    );
}

#[test]
fn scenario_e_strict_dominance_by_cheaper_option() {
    let a = constant(100.0, 2.0);
    let d = constant(90.0, 3.0);

    let frontier = EfficiencyFrontierSelector::select_frontier(
        &[Alternative::new("A", &a), Alternative::new("D", &d)],
        1.0,
    );

    assert_eq!(frontier, vec![FrontierEntry::new("D", 90.0, 3.0)]);
}

#[test]
fn reference_icer_is_always_zero() {
    let curves = [
        constant(10.0, 1.0),
        constant(40.0, 2.0),
        constant(45.0, 1.5),
        constant(100.0, 3.5),
    ];
    let labels = ["a", "b", "c", "d"];
    let candidates: Vec<_> = labels
        .iter()
        .zip(curves.iter())
        .map(|(label, curve)| Alternative::new(label, curve))
        .collect();

    let frontier = EfficiencyFrontierSelector::select_frontier(&candidates, 0.0);
    let icers = IcerCalculator::icer_table(&frontier).unwrap();

    assert_eq!(icers[0].value, 0.0);
    assert_eq!(icers.len(), frontier.len());
}

#[test]
fn scenario_file_runs_through_the_service() {
    let scenario = Scenario::from_json(
        r#"{
            "alternatives": [
                { "label": "no treatment", "segments": [{ "cost": 0, "effectiveness": 1.0 }] },
                {
                    "label": "drug",
                    "breakpoints": [20000],
                    "segments": [
                        { "cost": 4000, "effectiveness": 1.1, "strategy": "low dose" },
                        { "cost": 6000, "effectiveness": 1.3, "strategy": "high dose" }
                    ]
                },
                { "label": "surgery", "segments": [{ "cost": 30000, "effectiveness": 1.4 }] }
            ],
            "reference": "no treatment",
            "interval": { "index": 1 }
        }"#,
    )
    .unwrap();

    let report = FrontierAnalysis::default().run(&scenario.request()).unwrap();

    assert_eq!(report.intervals.len(), 2);
    assert_eq!(report.threshold.value(), 20_000.0);
    assert_eq!(report.selection.labels(), vec!["no treatment", "drug", "surgery"]);
    assert_eq!(report.selection.frontier[1].strategy.as_deref(), Some("high dose"));

    let relative = report.relative.unwrap();
    assert_eq!(relative[0].cost, 0.0);
    assert_eq!(relative[2].cost, 30_000.0);
    assert!(report.icers.iter().all(|icer| icer.value.is_finite()));
    assert_eq!(report.consecutive_icers[2].from, "drug");
}

#[test]
fn every_interval_of_a_session_can_be_analysed() {
    let flat = constant(50.0, 1.0);
    let rising = PiecewiseCurve::new(
        vec![100.0, 1_000.0],
        vec![
            CurveSegment::new(40.0, 0.9),
            CurveSegment::new(80.0, 1.5),
            CurveSegment::new(300.0, 2.5),
        ],
    )
    .unwrap();
    let alternatives = vec![Alternative::new("flat", &flat), Alternative::new("rising", &rising)];
    let analysis = FrontierAnalysis::default();
    let partition = analysis.partition(&alternatives);

    let frontiers: Vec<Vec<String>> = (0..partition.interval_count())
        .map(|index| {
            let request = FrontierRequest::new(alternatives.clone())
                .with_interval(IntervalChoice::Index(index));
            let report = analysis.run(&request).unwrap();
            report
                .selection
                .labels()
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .collect();

    assert_eq!(
        frontiers,
        vec![
            vec!["rising".to_string(), "flat".to_string()],
            vec!["flat".to_string(), "rising".to_string()],
            vec!["flat".to_string(), "rising".to_string()],
        ]
    );
}
