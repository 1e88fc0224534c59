//! Property path dispatch.
//!
//! Resolves a feature's dotted property path against the scope and decides
//! the invocation shape: a member call or read on a host object, a function
//! call, a construction, or a plain binding read.

use packspec_core::{Binding, HostError, Kwargs, Resolution, Scope, ScopeError};
use thiserror::Error;

/// Faults contained at the dispatcher boundary. Every variant becomes the
/// ERROR sentinel for the executing feature.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0}")]
    Scope(#[from] ScopeError),

    #[error("{0}")]
    Host(#[from] HostError),

    /// A call was attempted on something neither invocable nor
    /// constructible.
    #[error("{path} is not callable (resolved to {type_name})")]
    NotCallable { path: String, type_name: String },
}

/// Execute one resolved property access against the scope.
pub fn dispatch(
    scope: &Scope,
    path: &str,
    call: bool,
    args: &[Binding],
    kwargs: &Kwargs,
) -> Result<Binding, DispatchError> {
    match scope.resolve(path)? {
        Resolution::Member { object, member } => {
            if call {
                Ok(object.call(&member, args, kwargs)?)
            } else {
                Ok(object.get(&member)?)
            }
        }
        Resolution::Binding(binding) => {
            if !call {
                return Ok(binding);
            }
            match binding {
                Binding::Function(function) | Binding::Constructor(function) => {
                    Ok(function(args, kwargs)?)
                }
                other => Err(DispatchError::NotCallable {
                    path: path.to_string(),
                    type_name: other.type_name().to_string(),
                }),
            }
        }
    }
}
