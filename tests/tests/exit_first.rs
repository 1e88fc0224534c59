//! Exit-first control flow: the run stops at the first failed executed
//! feature, surfacing the triggering fault when there is one.

use packspec_tests::prelude::*;
use packspec_tests::load_spec;

#[test]
fn test_abort_on_fault_reraises_it() {
    let registry = demo_registry();
    let source = concat!(
        "- Demo\n",
        "- missing: []\n",
        "- add: [1, {'==': 1}]\n",
    );
    let mut spec = load_spec(source, &Target::default(), &registry).unwrap();
    let mut reporter = RecordingReporter::default();
    let error = run_spec(&mut spec, &mut reporter, true).unwrap_err();
    assert!(matches!(error, RunError::Fault { .. }));
    // Nothing after the failing feature ran.
    assert!(reporter.passed_texts().is_empty());
    // The abort dumps the current scope for diagnostics.
    assert!(reporter.events.iter().any(|event| matches!(
        event,
        Event::Aborted { scope_names } if scope_names.iter().any(|n| n == "$import")
    )));
}

#[test]
fn test_abort_on_assertion_mismatch() {
    let registry = demo_registry();
    let mut spec = load_spec(
        "- Demo\n- add: [1, 2, {'==': 4}]\n",
        &Target::default(),
        &registry,
    )
    .unwrap();
    let error = run_spec(&mut spec, &mut NullReporter, true).unwrap_err();
    match error {
        RunError::Assertion { text } => assert_eq!(text, "add(1, 2) == 4"),
        other => panic!("expected assertion abort, got {:?}", other),
    }
}

#[test]
fn test_abort_stops_later_specs() {
    let registry = demo_registry();
    let target = Target::default();
    let mut specs = vec![
        load_spec("- First\n- missing: []\n", &target, &registry).unwrap(),
        load_spec("- Second\n- add: [1, {'==': 1}]\n", &target, &registry).unwrap(),
    ];
    let mut reporter = RecordingReporter::default();
    let result = run_specs(&mut specs, &mut reporter, true);
    assert!(result.is_err());
    assert!(!reporter
        .events
        .iter()
        .any(|event| event == &Event::SpecStarted("Second".to_string())));
}

#[test]
fn test_without_exit_first_the_run_continues() {
    let registry = demo_registry();
    let target = Target::default();
    let mut specs = vec![
        load_spec("- First\n- missing: []\n", &target, &registry).unwrap(),
        load_spec("- Second\n- add: [1, {'==': 1}]\n", &target, &registry).unwrap(),
    ];
    let mut reporter = RecordingReporter::default();
    let success = run_specs(&mut specs, &mut reporter, false).unwrap();
    assert!(!success);
    assert!(reporter.passed_texts().contains(&"add(1) == 1"));
}
