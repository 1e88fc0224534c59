//! Spec execution.
//!
//! A spec owns its scope exclusively; features run strictly in document
//! order because assignments feed later lookups. Execution faults are
//! contained per feature as the ERROR sentinel; only exit-first mode turns
//! a failure into an abort of the whole run.

use crate::dereference::dereference;
use crate::dispatch::dispatch;
use crate::report::{Reporter, SpecOutcome};
use crate::{RunError, RunResult};
use packspec_core::{Binding, Kwargs, Registry, Scope, Value};
use packspec_parser::{Document, Feature, Stats};

/// One loaded spec document with its owned scope.
pub struct Spec {
    /// The subject under test, from the document's first comment.
    pub package: String,
    /// Ordered features.
    pub features: Vec<Feature>,
    /// Per-document counts.
    pub stats: Stats,
    /// The scope features execute against; mutated in document order,
    /// discarded with the spec.
    pub scope: Scope,
}

impl Spec {
    /// Build a spec from a parsed document, seeding the scope from the
    /// host registry.
    pub fn new(document: Document, registry: &Registry) -> Self {
        Self {
            package: document.package,
            features: document.features,
            stats: document.stats,
            scope: Scope::new(registry),
        }
    }
}

/// The verdict for one feature.
#[derive(Debug)]
pub enum FeatureOutcome {
    /// A narrative line; counted as passed.
    Comment,
    /// Excluded for the current target; counted as passed.
    Skipped,
    /// Executed and passed.
    Passed,
    /// Executed and failed.
    Failed {
        actual: Binding,
        expected: Option<Binding>,
        fault: Option<String>,
    },
}

impl FeatureOutcome {
    /// Whether this outcome counts toward the spec's passed total.
    pub fn counts_as_passed(&self) -> bool {
        !matches!(self, FeatureOutcome::Failed { .. })
    }
}

/// Execute one feature against the scope and produce its verdict.
pub fn run_feature(feature: &Feature, scope: &mut Scope) -> FeatureOutcome {
    if feature.is_comment() {
        return FeatureOutcome::Comment;
    }
    if feature.skip {
        return FeatureOutcome::Skipped;
    }

    // Dereference
    let mut args = Vec::new();
    let mut kwargs = Kwargs::new();
    if feature.call {
        args = feature
            .args
            .iter()
            .map(|value| dereference(value, scope))
            .collect();
        for (name, value) in &feature.kwargs {
            kwargs.insert(name.clone(), dereference(value, scope));
        }
    }
    let expected: Option<Binding> = feature
        .result
        .as_ref()
        .map(|value| dereference(value, scope));

    // Execute. A pure assignment with no property binds its own expected
    // literal; any dispatch fault becomes the ERROR sentinel.
    let mut fault = None;
    let mut actual = expected
        .clone()
        .unwrap_or_else(|| Binding::Value(Value::Null));
    if let Some(property) = &feature.property {
        match dispatch(scope, property, feature.call, &args, &kwargs) {
            Ok(result) => actual = result,
            Err(error) => {
                fault = Some(error.to_string());
                actual = Binding::Error;
            }
        }
    }

    // Assign, sentinel included; later features may reference it.
    if let Some(path) = &feature.assign {
        scope.assign(path, actual.clone());
    }

    // Compare
    let passed = match &expected {
        Some(expected) => actual.structural_eq(expected),
        None => !actual.is_error(),
    };
    if passed {
        FeatureOutcome::Passed
    } else {
        FeatureOutcome::Failed {
            actual,
            expected,
            fault,
        }
    }
}

/// Run one spec, reporting every verdict. Returns whether the whole spec
/// passed, or the abort error when exit-first trips.
pub fn run_spec(
    spec: &mut Spec,
    reporter: &mut dyn Reporter,
    exit_first: bool,
) -> RunResult<bool> {
    reporter.spec_started(&spec.package);

    let mut passed = 0usize;
    for feature in &spec.features {
        let outcome = run_feature(feature, &mut spec.scope);
        if outcome.counts_as_passed() {
            passed += 1;
        }
        match outcome {
            FeatureOutcome::Comment => {
                reporter.comment(feature.comment.as_deref().unwrap_or_default())
            }
            FeatureOutcome::Skipped => reporter.skipped(&feature.text),
            FeatureOutcome::Passed => reporter.passed(&feature.text),
            FeatureOutcome::Failed {
                actual,
                expected,
                fault,
            } => {
                reporter.failed(&feature.text, &actual, expected.as_ref(), fault.as_deref());
                if exit_first {
                    reporter.aborted(&spec.scope.names(), fault.as_deref());
                    return Err(match fault {
                        Some(message) => RunError::fault(message),
                        None => RunError::assertion(&feature.text),
                    });
                }
            }
        }
    }

    let success = passed == spec.stats.features;
    let outcome = SpecOutcome {
        success,
        tests_passed: passed - spec.stats.comments - spec.stats.skipped,
        tests_count: spec.stats.tests - spec.stats.skipped,
    };
    reporter.spec_finished(&spec.package, &outcome);

    Ok(success)
}

/// Run every spec in order. Returns true iff every spec passed.
pub fn run_specs(
    specs: &mut [Spec],
    reporter: &mut dyn Reporter,
    exit_first: bool,
) -> RunResult<bool> {
    reporter.run_started();
    let mut success = true;
    for spec in specs.iter_mut() {
        success &= run_spec(spec, reporter, exit_first)?;
    }
    Ok(success)
}
