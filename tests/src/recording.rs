//! A reporter that records every event for assertions.

use packspec_core::Binding;
use packspec_runner::{Reporter, SpecOutcome};

/// One reported event, with bindings rendered to their report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SpecStarted(String),
    Comment(String),
    Skipped(String),
    Passed(String),
    Failed {
        text: String,
        actual: String,
        expected: Option<String>,
        fault: Option<String>,
    },
    Aborted {
        scope_names: Vec<String>,
    },
    SpecFinished {
        package: String,
        success: bool,
        tests_passed: usize,
        tests_count: usize,
    },
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    /// The recorded failures, in order.
    pub fn failures(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Failed { .. }))
            .collect()
    }

    /// Texts of features that passed, in order.
    pub fn passed_texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Passed(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn spec_started(&mut self, package: &str) {
        self.events.push(Event::SpecStarted(package.to_string()));
    }

    fn comment(&mut self, text: &str) {
        self.events.push(Event::Comment(text.to_string()));
    }

    fn skipped(&mut self, text: &str) {
        self.events.push(Event::Skipped(text.to_string()));
    }

    fn passed(&mut self, text: &str) {
        self.events.push(Event::Passed(text.to_string()));
    }

    fn failed(
        &mut self,
        text: &str,
        actual: &Binding,
        expected: Option<&Binding>,
        fault: Option<&str>,
    ) {
        self.events.push(Event::Failed {
            text: text.to_string(),
            actual: actual.to_string(),
            expected: expected.map(|binding| binding.to_string()),
            fault: fault.map(str::to_string),
        });
    }

    fn aborted(&mut self, scope_names: &[String], _fault: Option<&str>) {
        self.events.push(Event::Aborted {
            scope_names: scope_names.to_vec(),
        });
    }

    fn spec_finished(&mut self, package: &str, outcome: &SpecOutcome) {
        self.events.push(Event::SpecFinished {
            package: package.to_string(),
            success: outcome.success,
            tests_passed: outcome.tests_passed,
            tests_count: outcome.tests_count,
        });
    }
}
