use kira_halflife::complex::{
    ComplexStructure, SubunitGroup, aggregate, filter_organism, parse_complexes, parse_subunits,
    resolve,
};
use kira_halflife::error::ParseError;
use kira_halflife::proteins::{DecayClass, ProteinTable};

fn table() -> ProteinTable {
    ProteinTable::from_entries([
        ("A", 1.0, DecayClass::Unclassified),
        ("B", 2.0, DecayClass::Ned),
        ("C", 3.0, DecayClass::Ed),
        ("D", 4.0, DecayClass::Ned),
    ])
}

#[test]
fn subunit_grammar() {
    let groups = parse_subunits("P1;[P2,P3];(P4 P5); ;P6", "db", 1).unwrap();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[0], SubunitGroup::single("P1"));
    assert_eq!(groups[1].candidates(), &["P2".to_string(), "P3".to_string()]);
    assert!(groups[2].is_ambiguous());
    assert!(!groups[3].is_ambiguous());
}

#[test]
fn unbalanced_group_is_parse_error() {
    for field in ["P1;[P2,P3", "P1;P2]", "[]", "[P1,[P2]]"] {
        let err = parse_subunits(field, "db", 7).unwrap_err();
        let parse = err.downcast_ref::<ParseError>().expect("typed parse error");
        assert_eq!(parse.line(), Some(7), "{}", field);
    }
}

#[test]
fn complex_file_parse_and_organism_filter() {
    let content = "# id\torganism\tsubunits\tname\n\
CX1\tHuman\tP1;P2\tProteasome\n\
\n\
CX2\tMouse\t[P3,P4]\n\
CX3\thuman\tP5\t\n";
    let complexes = parse_complexes(content, "corum.tsv").unwrap();
    assert_eq!(complexes.len(), 3);
    assert_eq!(complexes[0].name.as_deref(), Some("Proteasome"));
    assert_eq!(complexes[2].name, None);

    let human = filter_organism(complexes, "human");
    let ids: Vec<&str> = human.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CX1", "CX3"]);
}

#[test]
fn complex_row_needs_three_columns() {
    let err = parse_complexes("CX1\tHuman\n", "corum.tsv").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::FieldCount { line: 1, .. })
    ));
}

#[test]
fn resolver_skips_unclassified_candidates() {
    let t = table();
    let r = resolve(&SubunitGroup::new(["A", "B"]), &t).unwrap();
    assert_eq!(r.id, "B");
    assert_eq!(r.decay, DecayClass::Ned);
    let r = resolve(&SubunitGroup::new(["B", "A"]), &t).unwrap();
    assert_eq!(r.id, "B");
}

#[test]
fn resolver_first_classified_in_order_wins() {
    let t = table();
    let r = resolve(&SubunitGroup::new(["C", "B"]), &t).unwrap();
    assert_eq!(r.id, "C");
    assert_eq!(r.decay, DecayClass::Ed);
    assert_eq!(r.value, 3.0);

    let r = resolve(&SubunitGroup::new(["B", "D"]), &t).unwrap();
    assert_eq!(r.value, 2.0);
}

#[test]
fn resolver_absent_when_nothing_classified() {
    let t = table();
    assert!(resolve(&SubunitGroup::new(["A", "Z"]), &t).is_none());
    assert!(resolve(&SubunitGroup::single("Z"), &t).is_none());
}

#[test]
fn aggregate_partitions_without_dedup() {
    let t = table();
    let complex = ComplexStructure::new(
        "CX",
        vec![
            SubunitGroup::single("B"),
            SubunitGroup::single("B"),
            SubunitGroup::new(["A", "C"]),
            SubunitGroup::single("A"),
            SubunitGroup::single("missing"),
        ],
    );
    let groups = aggregate(&complex, &t);
    assert_eq!(groups.ned_values, vec![2.0, 2.0]);
    assert_eq!(groups.ed_values, vec![3.0]);
    assert!(groups.is_comparable());
}

#[test]
fn one_sided_aggregate_is_not_comparable() {
    let t = table();
    let complex = ComplexStructure::new(
        "CX",
        vec![SubunitGroup::single("B"), SubunitGroup::single("missing")],
    );
    let groups = aggregate(&complex, &t);
    assert_eq!(groups.ned_values, vec![2.0]);
    assert!(groups.ed_values.is_empty());
    assert!(!groups.is_comparable());
}
