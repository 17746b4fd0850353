use std::collections::HashMap;

use kira_halflife::complex::{ComplexStructure, SubunitGroup};
use kira_halflife::enrich::{
    EnrichmentOutcome, EnrichmentTester, Metric, MetricKind, Verdict, compare,
};
use kira_halflife::proteins::{DecayClass, HomologMap, ProteinRecord, ProteinTable};

fn record(id: &str, abundance: f64, decay: DecayClass) -> ProteinRecord {
    ProteinRecord {
        id: id.to_string(),
        abundance,
        decay,
        description: "-".to_string(),
    }
}

fn cx(id: &str, subunits: &[&str]) -> ComplexStructure {
    ComplexStructure::new(
        id,
        subunits.iter().map(|s| SubunitGroup::single(*s)).collect(),
    )
}

#[test]
fn tie_counts_as_success() {
    let table = ProteinTable::from_entries([
        ("N1", 2.0, DecayClass::Ned),
        ("N2", 4.0, DecayClass::Ned),
        ("E1", 3.0, DecayClass::Ed),
    ]);
    let c = compare(&cx("tie", &["N1", "N2", "E1"]), &table);
    assert_eq!(c.mean_ned, Some(3.0));
    assert_eq!(c.mean_ed, Some(3.0));
    assert_eq!(c.verdict, Verdict::Success);
}

#[test]
fn one_sided_complexes_are_not_trials() {
    let table = ProteinTable::from_entries([
        ("N1", 5.0, DecayClass::Ned),
        ("E1", 1.0, DecayClass::Ed),
        ("E2", 9.0, DecayClass::Ed),
        ("U1", 1.0, DecayClass::Unclassified),
    ]);
    let complexes = vec![
        cx("ned_only", &["N1", "U1"]),
        cx("ed_only", &["E1", "E2"]),
        cx("empty", &["missing"]),
        cx("win", &["N1", "E1"]),
        cx("loss", &["N1", "E2"]),
    ];
    let run = EnrichmentTester::new().run(&complexes, &table).unwrap();
    let outcome = &run.outcome;
    assert_eq!(outcome.trials, 2);
    assert_eq!(outcome.successes, 1);
    assert_eq!(outcome.skipped, 3);
    assert_eq!(run.comparisons.len(), 5);
    assert_eq!(run.comparisons[0].verdict, Verdict::Skipped);
    assert_eq!(run.comparisons[3].verdict, Verdict::Success);
    assert_eq!(run.comparisons[4].verdict, Verdict::Failure);
    assert_eq!(outcome.p_value, Some(1.0));
}

#[test]
fn zero_trials_is_undefined() {
    let table = ProteinTable::from_entries([("N1", 5.0, DecayClass::Ned)]);
    let run = EnrichmentTester::new()
        .run(&[cx("ned_only", &["N1"])], &table)
        .unwrap();
    assert_eq!(run.outcome.trials, 0);
    assert_eq!(run.outcome.successes, 0);
    assert_eq!(run.outcome.p_value, None);
    assert!(!run.outcome.is_defined());
    assert_eq!(run.outcome.triple(), "0 0 NA");
}

#[test]
fn eight_of_ten_reproduces_binomial() {
    let table = ProteinTable::from_entries([
        ("hi", 10.0, DecayClass::Ned),
        ("lo", 1.0, DecayClass::Ned),
        ("mid", 5.0, DecayClass::Ed),
    ]);
    let mut complexes = Vec::new();
    for i in 0..8 {
        complexes.push(cx(&format!("win{}", i), &["hi", "mid"]));
    }
    for i in 0..2 {
        complexes.push(cx(&format!("loss{}", i), &["lo", "mid"]));
    }
    let run = EnrichmentTester::new().run(&complexes, &table).unwrap();
    assert_eq!(run.outcome.successes, 8);
    assert_eq!(run.outcome.trials, 10);
    let p = run.outcome.p_value.unwrap();
    assert!((p - 0.109375).abs() < 1e-6);
}

#[test]
fn outcome_from_comparisons_counts_verdicts() {
    let table = ProteinTable::from_entries([
        ("N", 1.0, DecayClass::Ned),
        ("E", 2.0, DecayClass::Ed),
    ]);
    let comparisons = vec![
        compare(&cx("a", &["N", "E"]), &table),
        compare(&cx("b", &["E", "N"]), &table),
        compare(&cx("c", &["N"]), &table),
    ];
    let outcome = EnrichmentOutcome::from_comparisons(&comparisons).unwrap();
    assert_eq!(outcome.successes, 0);
    assert_eq!(outcome.trials, 2);
    assert_eq!(outcome.skipped, 1);
    assert!(outcome.successes <= outcome.trials);
}

#[test]
fn homolog_miss_is_a_skip_not_an_error() {
    let records = vec![
        record("mN", 8.0, DecayClass::Ned),
        record("mE", 2.0, DecayClass::Ed),
        record("unmapped", 100.0, DecayClass::Ed),
    ];
    let homologs = HomologMap::from_pairs([("mN", "hN"), ("mE", "hE")]);
    let complexes = vec![cx("CX", &["hN", "hE", "unmapped"])];

    let (table, run) = EnrichmentTester::new()
        .run_records(&records, &Metric::LogAbundance, Some(&homologs), &complexes)
        .unwrap();
    assert_eq!(table.stats().homolog_misses, 1);
    assert!(table.lookup("unmapped").is_none());
    assert_eq!(run.outcome.trials, 1);
    assert_eq!(run.outcome.successes, 1);
    let c = &run.comparisons[0];
    assert!((c.mean_ned.unwrap() - 8.0f64.ln()).abs() < 1e-12);
    assert!((c.mean_ed.unwrap() - 2.0f64.ln()).abs() < 1e-12);
}

#[test]
fn log_abundance_skips_non_positive_values() {
    let records = vec![
        record("N", 0.0, DecayClass::Ned),
        record("E", 2.0, DecayClass::Ed),
    ];
    let (table, run) = EnrichmentTester::new()
        .run_records(&records, &Metric::LogAbundance, None, &[cx("CX", &["N", "E"])])
        .unwrap();
    assert_eq!(table.stats().metric_misses, 1);
    assert_eq!(run.outcome.trials, 0);
}

#[test]
fn metric_choice_changes_outcome_through_one_engine() {
    let records = vec![
        record("N", 100.0, DecayClass::Ned),
        record("E", 10.0, DecayClass::Ed),
    ];
    let complexes = vec![cx("CX", &["N", "E"])];
    let tester = EnrichmentTester::new();

    let (_, by_abundance) = tester
        .run_records(&records, &Metric::Abundance, None, &complexes)
        .unwrap();
    assert_eq!(by_abundance.outcome.successes, 1);

    let mut counts = HashMap::new();
    counts.insert("N".to_string(), 3u32);
    counts.insert("E".to_string(), 12u32);
    let metric = Metric::TissueCount(counts);
    assert_eq!(metric.kind(), MetricKind::TissueCount);
    let (_, by_tissue) = tester
        .run_records(&records, &metric, None, &complexes)
        .unwrap();
    assert_eq!(by_tissue.outcome.trials, 1);
    assert_eq!(by_tissue.outcome.successes, 0);
}

#[test]
fn tissue_count_is_looked_up_by_translated_id() {
    let records = vec![
        record("mN", 1.0, DecayClass::Ned),
        record("mE", 1.0, DecayClass::Ed),
    ];
    let homologs = HomologMap::from_pairs([("mN", "hN"), ("mE", "hE")]);
    let mut counts = HashMap::new();
    counts.insert("hN".to_string(), 30u32);
    counts.insert("mE".to_string(), 5u32);
    let (table, _) = EnrichmentTester::new()
        .run_records(&records, &Metric::TissueCount(counts), Some(&homologs), &[])
        .unwrap();
    assert_eq!(table.lookup("hN").unwrap().value, 30.0);
    assert!(table.lookup("hE").is_none());
    assert_eq!(table.stats().metric_misses, 1);
}

#[test]
fn closure_metric_extractor() {
    let records = vec![
        record("N", 1.0, DecayClass::Ned),
        record("E", 4.0, DecayClass::Ed),
    ];
    let negated = |_: &str, r: &ProteinRecord| Some(-r.abundance);
    let (_, run) = EnrichmentTester::new()
        .run_records(&records, &negated, None, &[cx("CX", &["N", "E"])])
        .unwrap();
    assert_eq!(run.outcome.successes, 1);
}

#[test]
fn repeated_runs_are_identical() {
    let table = ProteinTable::from_entries([
        ("N1", 1.0, DecayClass::Ned),
        ("N2", 7.0, DecayClass::Ned),
        ("E1", 3.0, DecayClass::Ed),
    ]);
    let complexes: Vec<ComplexStructure> = (0..50)
        .map(|i| {
            let ned = if i % 3 == 0 { "N1" } else { "N2" };
            cx(&format!("c{}", i), &[ned, "E1"])
        })
        .collect();
    let a = EnrichmentTester::new().run(&complexes, &table).unwrap();
    let b = EnrichmentTester::new().run(&complexes, &table).unwrap();
    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.comparisons, b.comparisons);
}
