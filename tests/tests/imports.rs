//! The `$import` capability and host objects reached through it.

use packspec_tests::prelude::*;
use packspec_tests::run_source;

#[test]
fn test_import_populates_scope_namespace() {
    let source = concat!(
        "- Demo\n",
        "- y=$import: [{demo}]\n",
        "- y.VERSION==: '1.0'\n",
    );
    let (success, _) = run_source(source);
    assert!(success);
}

#[test]
fn test_import_accepts_plain_string_name() {
    let source = concat!(
        "- Demo\n",
        "- y=$import: [demo]\n",
        "- y.greet: [world, {'==': hello world}]\n",
    );
    let (success, _) = run_source(source);
    assert!(success);
}

#[test]
fn test_construction_through_imported_namespace() {
    let source = concat!(
        "- Demo\n",
        "- y=$import: [{demo}]\n",
        "- y.SomeClass: [{'==': {}}]\n",
    );
    let (success, _) = run_source(source);
    assert!(success);
}

#[test]
fn test_constructed_object_methods() {
    let source = concat!(
        "- Demo\n",
        "- r=Record: [{name=: ada}]\n",
        "- r.size: [{'==': 1}]\n",
        "- r.name==: ada\n",
        "- s=r.with: [city, london]\n",
        "- s.size: [{'==': 2}]\n",
    );
    let (success, reporter) = run_source(source);
    assert!(success, "failures: {:?}", reporter.failures());
}

#[test]
fn test_unknown_import_is_a_contained_fault() {
    let (success, reporter) = run_source("- Demo\n- $import: [{nonexistent}]\n");
    assert!(!success);
    match &reporter.failures()[..] {
        [Event::Failed { fault, .. }] => {
            assert!(fault
                .as_deref()
                .is_some_and(|f| f.contains("unknown import")));
        }
        other => panic!("expected one failure, got {:?}", other),
    }
}
