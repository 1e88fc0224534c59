//! Packspec Runner
//!
//! This crate executes parsed spec documents against a live scope:
//! - Dereferencing reference literals to scope-bound values
//! - Dispatching property paths to reads, calls, and constructions
//! - Per-feature verdicts and per-spec aggregation
//! - The Reporter boundary and exit-first control flow

mod dereference;
mod dispatch;
mod error;
mod report;
mod spec;

pub use dereference::dereference;
pub use dispatch::{dispatch, DispatchError};
pub use error::{RunError, RunResult};
pub use report::{NullReporter, Reporter, SpecOutcome};
pub use spec::{run_feature, run_spec, run_specs, FeatureOutcome, Spec};
