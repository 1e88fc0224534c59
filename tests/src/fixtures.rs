//! A demo host registry exercising every binding variant.

use indexmap::IndexMap;
use packspec_core::{
    value_map, Binding, HostError, HostObject, HostResult, Kwargs, Registry, Value,
};

/// A constructible, method-bearing host type. Its literal view is the map
/// of its fields, so fresh instances compare equal to `{}` literals plus
/// whatever was set.
struct Record {
    fields: IndexMap<String, Value>,
}

impl HostObject for Record {
    fn type_name(&self) -> &str {
        "Record"
    }

    fn get(&self, member: &str) -> HostResult<Binding> {
        self.fields
            .get(member)
            .map(|value| Binding::Value(value.clone()))
            .ok_or_else(|| HostError::unknown_member("Record", member))
    }

    fn call(&self, member: &str, args: &[Binding], kwargs: &Kwargs) -> HostResult<Binding> {
        match member {
            // Returns a copy with one field set.
            "with" => {
                let name = string_arg(args, 0)?;
                let value = args
                    .get(1)
                    .and_then(|binding| binding.to_value())
                    .unwrap_or(Value::Null);
                let mut fields = self.fields.clone();
                fields.insert(name, value);
                Ok(Binding::object(Record { fields }))
            }
            "size" => Ok(Binding::value(self.fields.len() as i64)),
            "fail" => Err(HostError::failure("record fault")),
            _ => {
                let _ = kwargs;
                Err(HostError::unknown_member("Record", member))
            }
        }
    }

    fn as_value(&self) -> Option<Value> {
        Some(Value::Map(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ))
    }
}

fn string_arg(args: &[Binding], index: usize) -> HostResult<String> {
    args.get(index)
        .and_then(|binding| binding.to_value())
        .and_then(|value| value.as_str().map(str::to_string))
        .ok_or_else(|| HostError::invalid_arguments(format!("argument {} must be a string", index)))
}

fn int_args(args: &[Binding]) -> Vec<i64> {
    args.iter()
        .filter_map(|binding| binding.to_value())
        .filter_map(|value| value.as_int())
        .collect()
}

/// Build the demo registry: `add` and `concat` functions, the `Record`
/// constructor, a `config` value, and an importable `demo` namespace.
pub fn demo_registry() -> Registry {
    Registry::builder()
        .function("add", |args, _kwargs| {
            Ok(Binding::value(int_args(args).iter().sum::<i64>()))
        })
        .function("concat", |args, kwargs| {
            let mut out = String::new();
            for binding in args {
                if let Some(Value::String(s)) = binding.to_value() {
                    out.push_str(&s);
                }
            }
            // The separator keyword demonstrates the distinct kwargs channel.
            if let Some(Value::String(sep)) = kwargs.get("sep").and_then(|b| b.to_value()) {
                let joined: Vec<String> = args
                    .iter()
                    .filter_map(|b| b.to_value())
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                out = joined.join(&sep);
            }
            Ok(Binding::value(out))
        })
        .constructor("Record", |_args, kwargs| {
            let fields = kwargs
                .iter()
                .map(|(name, binding)| (name.clone(), binding.to_value().unwrap_or(Value::Null)))
                .collect();
            Ok(Binding::object(Record { fields }))
        })
        .value("config", Value::Map(value_map! { "debug" => true }))
        .import(|package| match package {
            "demo" => {
                let mut names = packspec_core::NamespaceMap::new();
                names.insert(
                    "SomeClass".to_string(),
                    Binding::constructor(|_args, _kwargs| {
                        Ok(Binding::object(Record {
                            fields: IndexMap::new(),
                        }))
                    }),
                );
                names.insert(
                    "greet".to_string(),
                    Binding::function(|args, _kwargs| {
                        let name = string_arg(args, 0)?;
                        Ok(Binding::value(format!("hello {}", name)))
                    }),
                );
                names.insert("VERSION".to_string(), Binding::value("1.0"));
                Ok(Binding::Namespace(names))
            }
            other => Err(HostError::unknown_import(other)),
        })
        .build()
}
