//! Integration test fixtures for packspec.
//!
//! Provides a demo host registry with functions, a constructible type, and
//! an importable namespace, plus a recording reporter and spec-running
//! helpers used by the end-to-end tests.

mod fixtures;
mod recording;

pub use fixtures::demo_registry;
pub use recording::{Event, RecordingReporter};

pub mod prelude {
    pub use crate::{demo_registry, Event, RecordingReporter};
    pub use packspec_core::{value_map, Binding, Registry, Scope, Value};
    pub use packspec_parser::{parse_document, Target};
    pub use packspec_runner::{run_spec, run_specs, NullReporter, RunError, Spec};
}

use packspec_core::Registry;
use packspec_parser::{parse_document, Target};
use packspec_runner::{run_spec, Spec};

/// Parse a spec source for a target, or panic on a structurally broken
/// document (tests always feed well-formed YAML).
pub fn load_spec(source: &str, target: &Target, registry: &Registry) -> Option<Spec> {
    parse_document(source, target)
        .expect("valid yaml")
        .map(|document| Spec::new(document, registry))
}

/// Run one source document against the demo registry under the default
/// target, recording every reported event.
pub fn run_source(source: &str) -> (bool, RecordingReporter) {
    let registry = demo_registry();
    let mut spec = load_spec(source, &Target::default(), &registry).expect("document accepted");
    let mut reporter = RecordingReporter::default();
    let success = run_spec(&mut spec, &mut reporter, false).expect("run not aborted");
    (success, reporter)
}
