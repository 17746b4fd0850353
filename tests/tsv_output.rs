use std::fs;
use std::path::PathBuf;

use kira_halflife::complex::{ComplexStructure, SubunitGroup};
use kira_halflife::ctx::{Ctx, EnrichSettings, IsoformSettings, Task};
use kira_halflife::enrich::{EnrichmentTester, MetricKind};
use kira_halflife::io::tsv_writer::{COMPLEX_HEADER, write_complex_tsv, write_isoform_tsv};
use kira_halflife::isoform::{IsoformExpressionVector, RepresentativeRow};
use kira_halflife::proteins::{DecayClass, ProteinTable, parse_tissue_counts};
use tempfile::TempDir;

fn enrich_ctx(out: PathBuf) -> Ctx {
    let task = Task::Enrich(EnrichSettings {
        complexes_path: PathBuf::from("corum.tsv"),
        organism: "human".to_string(),
        metric: MetricKind::Abundance,
        homologs_path: None,
        tissue_table_path: None,
    });
    Ctx::new(PathBuf::from("ned.tsv"), task, out, false, true, "0.0.0-test")
}

#[test]
fn complex_tsv_rows_follow_input_order() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = enrich_ctx(tmp.path().to_path_buf());
    let table = ProteinTable::from_entries([
        ("N", 2.0, DecayClass::Ned),
        ("E", 1.0, DecayClass::Ed),
    ]);
    let complexes = vec![
        ComplexStructure::new("CX1", vec![SubunitGroup::single("N"), SubunitGroup::single("E")]),
        ComplexStructure::new("CX2", vec![SubunitGroup::single("N")]),
    ];
    ctx.enrichment = Some(EnrichmentTester::new().run(&complexes, &table).unwrap());

    let path = tmp.path().join("complexes.tsv");
    write_complex_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], COMPLEX_HEADER);
    assert_eq!(lines[1], "CX1\t1\t1\t2\t1\tsuccess");
    assert_eq!(lines[2], "CX2\t1\t0\t2\tNA\tskipped");
}

#[test]
fn complex_tsv_requires_results() {
    let tmp = TempDir::new().unwrap();
    let ctx = enrich_ctx(tmp.path().to_path_buf());
    assert!(write_complex_tsv(&tmp.path().join("x.tsv"), &ctx).is_err());
}

#[test]
fn isoform_tsv_reads_back_as_tissue_table() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("tissues.tsv");
    let task = Task::Isoforms(IsoformSettings {
        expression_path: PathBuf::from("expr.tsv"),
        fallback_expression_path: None,
        protein_map_path: None,
        tissues_path: None,
        skip_tissues: Vec::new(),
        output_path: out.clone(),
    });
    let mut ctx = Ctx::new(
        PathBuf::from("ned.tsv"),
        task,
        tmp.path().to_path_buf(),
        false,
        false,
        "0.0.0-test",
    );
    ctx.tissues = vec!["liver".to_string(), "adrenal gland".to_string()];
    ctx.isoform_rows = vec![RepresentativeRow {
        protein: "P1".to_string(),
        vector: IsoformExpressionVector::new("ENSP1", vec![Some(1.5), None]),
        description: "NED".to_string(),
    }];

    write_isoform_tsv(&out, &ctx).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "prot\tliver\tadrenal gland\ttcount\tdef");
    assert_eq!(lines[1], "P1\t1.5\tNA\t1\tNED");

    let counts = parse_tissue_counts(&content, "tissues.tsv").unwrap();
    assert_eq!(counts.get("P1"), Some(&1));
}
