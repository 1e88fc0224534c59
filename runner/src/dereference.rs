//! Resolving reference literals against the scope.
//!
//! A reference literal is a single-entry mapping whose sole value is null;
//! its key is a dotted scope path. Containers are processed element-wise,
//! recursively; concrete scalars pass through unchanged.

use packspec_core::{Binding, Scope, Value};

/// Dereference one literal-or-reference value against the scope.
///
/// A top-level reference resolves to whatever binding the path names,
/// host objects and callables included. An unresolvable reference passes
/// through as the literal mapping it is written as; this keeps
/// dereferencing total and lets `$import` receive its normalized
/// `{pkg}` set-literal argument verbatim.
pub fn dereference(value: &Value, scope: &Scope) -> Binding {
    if let Some(path) = value.reference_path() {
        if let Ok(binding) = scope.lookup(path) {
            return binding;
        }
        return Binding::Value(value.clone());
    }
    Binding::Value(resolve_nested(value, scope))
}

/// Resolve references nested inside containers. A nested reference only
/// splices in when the binding it names has a literal view.
fn resolve_nested(value: &Value, scope: &Scope) -> Value {
    if let Some(path) = value.reference_path() {
        if let Ok(binding) = scope.lookup(path) {
            if let Some(resolved) = binding.to_value() {
                return resolved;
            }
        }
        return value.clone();
    }
    match value {
        Value::List(items) => Value::List(
            items
                .iter()
                .map(|item| resolve_nested(item, scope))
                .collect(),
        ),
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(key, item)| (key.clone(), resolve_nested(item, scope)))
                .collect(),
        ),
        other => other.clone(),
    }
}
