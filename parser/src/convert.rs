//! Conversion from parsed YAML nodes to the core value model.

use crate::{ParseError, ParseResult};
use packspec_core::{Value, ValueMap};

/// Convert a YAML node to a core [`Value`].
///
/// Mapping keys must be scalars; non-string scalar keys are stringified the
/// way they were written.
pub fn yaml_to_value(node: &serde_yaml::Value) -> ParseResult<Value> {
    match node {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(ParseError::malformed(format!("unsupported number {}", n)))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(yaml_to_value(item)?);
            }
            Ok(Value::List(out))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = ValueMap::with_capacity(map.len());
            for (key, value) in map {
                out.insert(yaml_key(key)?, yaml_to_value(value)?);
            }
            Ok(Value::Map(out))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(&tagged.value),
    }
}

/// Stringify a YAML mapping key.
pub fn yaml_key(key: &serde_yaml::Value) -> ParseResult<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(ParseError::malformed(format!(
            "unsupported mapping key: {:?}",
            other
        ))),
    }
}
