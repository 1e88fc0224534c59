//! The reporter boundary.
//!
//! The runner decides pass/fail; everything human-facing goes through this
//! trait. The console rendering lives in the CLI crate.

use packspec_core::Binding;

/// Aggregated per-spec result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecOutcome {
    /// True iff every feature (comments and skips included) passed.
    pub success: bool,
    /// Executed tests that passed.
    pub tests_passed: usize,
    /// Executed tests (skips excluded).
    pub tests_count: usize,
}

/// Receives per-feature verdicts and per-spec aggregates.
pub trait Reporter {
    /// A run over one or more specs is starting.
    fn run_started(&mut self) {}

    /// A spec is starting.
    fn spec_started(&mut self, package: &str) {
        let _ = package;
    }

    /// A narrative comment line.
    fn comment(&mut self, text: &str) {
        let _ = text;
    }

    /// A feature excluded for the current target.
    fn skipped(&mut self, text: &str) {
        let _ = text;
    }

    /// An executed feature that passed.
    fn passed(&mut self, text: &str) {
        let _ = text;
    }

    /// An executed feature that failed, with the actual value, the
    /// dereferenced expected value if one was declared, and the triggering
    /// fault message if the failure came from a fault.
    fn failed(
        &mut self,
        text: &str,
        actual: &Binding,
        expected: Option<&Binding>,
        fault: Option<&str>,
    ) {
        let _ = (text, actual, expected, fault);
    }

    /// Exit-first tripped; the run stops here. `scope_names` is the failing
    /// spec's current top-level scope, for diagnostics.
    fn aborted(&mut self, scope_names: &[String], fault: Option<&str>) {
        let _ = (scope_names, fault);
    }

    /// A spec finished (not called when exit-first aborts it).
    fn spec_finished(&mut self, package: &str, outcome: &SpecOutcome) {
        let _ = (package, outcome);
    }
}

/// A reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}
