mod common;
mod fixtures;

use bltl_monitor::bltl::{BltlMonitor, FormulaDefinition, parse_node_description};
use bltl_monitor::error::FormulaError;
use rstest::rstest;

use common::p;
use fixtures::formulas::response;

// ---
// Test Runner for Build Failures
// ---

#[rstest]
#[should_panic]
fn test_monitor_build_fails_without_formula() {
    let _ = BltlMonitor::builder().predicates(2).build().unwrap();
}

#[rstest]
#[should_panic]
fn test_monitor_build_fails_narrow_predicate_vector() {
    // response reads p0 and p1
    let _ = BltlMonitor::builder()
        .formula(response())
        .predicates(1)
        .build()
        .unwrap();
}

#[rstest]
#[case::zero(0.0)]
#[case::negative(-2.0)]
#[case::infinite(f64::INFINITY)]
#[case::nan(f64::NAN)]
fn test_monitor_build_fails_invalid_horizon(#[case] horizon: f64) {
    let nested = FormulaDefinition::And(
        p(0),
        Box::new(FormulaDefinition::Until(horizon, p(0), p(1))),
    );
    let result = BltlMonitor::builder().formula(nested).build();
    assert!(matches!(result, Err(FormulaError::InvalidHorizon(_))));
}

#[rstest]
#[case::missing_child(r#"{ "NodeType": 4, "Alpha": 1 }"#)]
#[case::missing_second_child(r#"{ "NodeType": 3, "FirstChildNode": { "NodeType": 0, "PredicateIndex": 0 } }"#)]
#[case::unknown_type(r#"{ "NodeType": 7 }"#)]
#[case::fractional_type(r#"{ "NodeType": 0.5 }"#)]
#[case::negative_alpha(r#"{ "NodeType": 5, "Alpha": -1, "ChildNode": { "NodeType": 0, "PredicateIndex": 0 } }"#)]
#[case::negative_index(r#"{ "NodeType": 0, "PredicateIndex": -3 }"#)]
#[case::not_json(r#"NodeType = 0"#)]
#[should_panic]
fn test_node_description_fails(#[case] json: &str) {
    let _ = parse_node_description(json).unwrap();
}
