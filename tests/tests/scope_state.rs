//! Scope evolution across features: assignments, references, skip
//! sections, and identifier normalization.

use packspec_tests::prelude::*;
use packspec_tests::{load_spec, run_source};

#[test]
fn test_assignment_feeds_later_features() {
    let source = concat!(
        "- Demo\n",
        "- x=add: [1, 2]\n",
        "- add: [{x}, {x}, {'==': 6}]\n",
    );
    let (success, _) = run_source(source);
    assert!(success);
}

#[test]
fn test_reference_before_assignment_does_not_resolve() {
    // `{x}` dereferences to its literal mapping while `x` is unbound, so
    // the sum ignores it; the assignment later does not rewrite history.
    let source = concat!(
        "- Demo\n",
        "- add: [{x}, 1, {'==': 1}]\n",
        "- x=add: [5]\n",
        "- add: [{x}, 1, {'==': 6}]\n",
    );
    let (success, _) = run_source(source);
    assert!(success);
}

#[test]
fn test_dotted_assignment_creates_namespaces() {
    let source = concat!(
        "- Demo\n",
        "- fixtures.user=: alice\n",
        "- fixtures.user==: alice\n",
    );
    let (success, _) = run_source(source);
    assert!(success);
}

#[test]
fn test_faulted_result_is_assigned_as_error_sentinel() {
    let registry = demo_registry();
    let mut spec = load_spec("- Demo\n- x=missing: []\n", &Target::default(), &registry).unwrap();
    let success = run_spec(&mut spec, &mut NullReporter, false).unwrap();
    assert!(!success);
    assert!(spec.scope.lookup("x").unwrap().is_error());
}

#[test]
fn test_skip_section_propagates_until_next_comment() {
    let registry = demo_registry();
    let source = concat!(
        "- Demo\n",
        "- (not:js) only for js\n",
        "- missing: []\n",
        "- everyone again\n",
        "- add: [1, {'==': 1}]\n",
    );
    // `not:js` is an opaque allow-list token: no target matches it, so the
    // section is skipped under php and rs alike.
    for target in ["php", "rs"] {
        let mut spec = load_spec(source, &Target::new(target), &registry).unwrap();
        let mut reporter = RecordingReporter::default();
        let success = run_spec(&mut spec, &mut reporter, false).unwrap();
        assert!(success, "target {}", target);
        assert_eq!(reporter.events[3], Event::Skipped("missing()".to_string()));
        assert_eq!(reporter.passed_texts(), ["add(1) == 1"]);
    }
}

#[test]
fn test_underscored_property_normalized_to_camel_case() {
    // The registry binds camelCase names; spec documents may write
    // snake_case and still hit them.
    let registry = Registry::builder()
        .function("makeGreeting", |_args, _kwargs| Ok(Binding::value("hi")))
        .build();
    let source = "- Demo\n- make_greeting: [{'==': hi}]\n";
    let mut spec = load_spec(source, &Target::default(), &registry).unwrap();
    let success = run_spec(&mut spec, &mut NullReporter, false).unwrap();
    assert!(success);
}

#[test]
fn test_registry_value_readable_through_dotted_path() {
    let (success, _) = run_source("- Demo\n- config.debug==: true\n");
    assert!(success);
}

#[test]
fn test_keyword_arguments_reach_the_host() {
    let source = "- Demo\n- concat: [a, b, {sep=: '-'}, {'==': a-b}]\n";
    let (success, _) = run_source(source);
    assert!(success);
}
