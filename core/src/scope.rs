//! The mutable namespace property paths resolve against.
//!
//! A scope is owned by exactly one spec and mutated in document order by
//! assignment features. Lookup walks dotted paths left to right through
//! namespace-like containers; once the walk lands on a host object, the
//! remaining segments become member names on that object.

use crate::{
    import_package_name, Binding, NamespaceMap, ObjectRef, Registry, ScopeError, ScopeResult,
    Value, ValueMap,
};

/// Name of the builtin import binding.
pub const IMPORT_NAME: &str = "$import";

/// The result of walking a property path.
#[derive(Clone)]
pub enum Resolution {
    /// The walk stayed inside namespace territory and ended on a binding.
    Binding(Binding),
    /// The walk crossed into a host object; `member` is the remaining
    /// member name to read or invoke on it.
    Member { object: ObjectRef, member: String },
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Binding(binding) => write!(f, "Binding({:?})", binding),
            Resolution::Member { object, member } => {
                write!(f, "Member({}.{})", object.type_name(), member)
            }
        }
    }
}

/// An ordered, mutable namespace mapping identifiers to bindings.
pub struct Scope {
    root: NamespaceMap,
}

impl Scope {
    /// Create a scope seeded with the registry's import capability and
    /// user bindings.
    pub fn new(registry: &Registry) -> Self {
        let mut root = NamespaceMap::new();
        let import = registry.import_fn();
        root.insert(
            IMPORT_NAME.to_string(),
            Binding::function(move |args, _kwargs| {
                let package = import_package_name(args)?;
                import(&package)
            }),
        );
        for (name, binding) in registry.bindings() {
            root.insert(name.clone(), binding.clone());
        }
        Self { root }
    }

    /// Create an empty scope with no import capability.
    pub fn empty() -> Self {
        Self {
            root: NamespaceMap::new(),
        }
    }

    /// Top-level identifiers, in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.root.keys().cloned().collect()
    }

    /// Returns true if a top-level identifier is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.root.contains_key(name)
    }

    /// Walk a dotted path, returning either the binding it ends on or the
    /// (object, member) pair where the walk crossed out of namespace
    /// territory.
    pub fn resolve(&self, path: &str) -> ScopeResult<Resolution> {
        let segments: Vec<&str> = path.split('.').collect();
        let mut current = Cursor::Namespace(&self.root);

        for (index, segment) in segments.iter().enumerate() {
            let last = index + 1 == segments.len();
            match current {
                Cursor::Namespace(map) => {
                    let binding = namespace_get(map, segment)
                        .ok_or_else(|| ScopeError::unknown_identifier(*segment))?;
                    if last {
                        return Ok(Resolution::Binding(binding.clone()));
                    }
                    current = match binding {
                        Binding::Namespace(inner) => Cursor::Namespace(inner),
                        Binding::Value(Value::Map(inner)) => Cursor::Values(inner),
                        Binding::Object(object) => Cursor::Object(object.clone()),
                        other => {
                            return Err(ScopeError::not_traversable(
                                segments[index + 1],
                                other.type_name(),
                            ))
                        }
                    };
                }
                Cursor::Values(map) => {
                    let value = value_get(map, segment)
                        .ok_or_else(|| ScopeError::unknown_identifier(*segment))?;
                    if last {
                        return Ok(Resolution::Binding(Binding::Value(value.clone())));
                    }
                    current = match value {
                        Value::Map(inner) => Cursor::Values(inner),
                        other => {
                            return Err(ScopeError::not_traversable(
                                segments[index + 1],
                                other.type_name(),
                            ))
                        }
                    };
                }
                Cursor::Object(object) => {
                    if last {
                        return Ok(Resolution::Member {
                            object,
                            member: segment.to_string(),
                        });
                    }
                    // Intermediate members past the crossing point must
                    // themselves resolve to objects.
                    current = match object.get(segment)? {
                        Binding::Object(inner) => Cursor::Object(inner),
                        other => {
                            return Err(ScopeError::not_traversable(
                                segments[index + 1],
                                other.type_name(),
                            ))
                        }
                    };
                }
            }
        }

        Err(ScopeError::unknown_identifier(path))
    }

    /// Resolve a dotted path all the way to a binding, reading the final
    /// object member when the walk crosses into an object.
    pub fn lookup(&self, path: &str) -> ScopeResult<Binding> {
        match self.resolve(path)? {
            Resolution::Binding(binding) => Ok(binding),
            Resolution::Member { object, member } => Ok(object.get(&member)?),
        }
    }

    /// Bind a value at a dotted path, creating intermediate namespaces as
    /// needed. Any non-namespace intermediate is replaced.
    pub fn assign(&mut self, path: &str, binding: Binding) {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, intermediate) = segments.split_last().expect("path is never empty");

        let mut current = &mut self.root;
        for segment in intermediate {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Binding::Namespace(NamespaceMap::new()));
            if !matches!(entry, Binding::Namespace(_)) {
                *entry = Binding::Namespace(NamespaceMap::new());
            }
            current = match entry {
                Binding::Namespace(map) => map,
                _ => unreachable!("entry was just made a namespace"),
            };
        }
        current.insert(last.to_string(), binding);
    }
}

/// Where the path walk currently stands.
enum Cursor<'a> {
    /// Inside a namespace of bindings.
    Namespace(&'a NamespaceMap),
    /// Inside plain mapping data previously bound into the scope.
    Values(&'a ValueMap),
    /// Crossed onto a host object.
    Object(ObjectRef),
}

/// Case-sensitive match first, case-insensitive as a last-resort fallback.
fn namespace_get<'a>(map: &'a NamespaceMap, name: &str) -> Option<&'a Binding> {
    map.get(name).or_else(|| {
        map.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, binding)| binding)
    })
}

fn value_get<'a>(map: &'a ValueMap, name: &str) -> Option<&'a Value> {
    map.get(name).or_else(|| {
        map.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}
