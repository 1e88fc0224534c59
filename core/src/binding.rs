//! Bindings: the tagged handle surface the dispatcher operates over.
//!
//! Other packspec runners resolve names to callables and classes
//! through ambient language reflection. Here every entity the
//! host publishes is an explicit `Binding` variant; the dispatcher never
//! inspects anything beyond this tagged surface.

use crate::{HostError, HostResult, Value};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Keyword arguments, insertion-ordered with unique names.
pub type Kwargs = IndexMap<String, Binding>;

/// An ordered namespace of bindings.
pub type NamespaceMap = IndexMap<String, Binding>;

/// A host-invocable entity: free function or constructor body.
pub type NativeFn = Rc<dyn Fn(&[Binding], &Kwargs) -> HostResult<Binding>>;

/// A method-bearing host instance.
///
/// The interpreter only ever reads members, calls members, and (optionally)
/// converts the object to a literal value for structural comparison.
pub trait HostObject {
    /// Host-facing type name, used in diagnostics.
    fn type_name(&self) -> &str;

    /// Read a member without arguments.
    fn get(&self, member: &str) -> HostResult<Binding>;

    /// Invoke a member with positional and keyword arguments.
    fn call(&self, member: &str, args: &[Binding], kwargs: &Kwargs) -> HostResult<Binding>;

    /// Literal view of this object for structural comparison, if it has one.
    fn as_value(&self) -> Option<Value> {
        None
    }
}

/// A reference-counted host object handle.
pub type ObjectRef = Rc<dyn HostObject>;

/// One entry in a scope: a value, an invocable, a constructible type, a
/// method-bearing object, a nested namespace, or the ERROR sentinel.
#[derive(Clone)]
pub enum Binding {
    /// Concrete literal data.
    Value(Value),
    /// A host-invocable function.
    Function(NativeFn),
    /// A constructible type; invoking it yields a new binding.
    Constructor(NativeFn),
    /// A method-bearing host instance.
    Object(ObjectRef),
    /// A nested namespace of bindings.
    Namespace(NamespaceMap),
    /// The sentinel result of a faulted invocation. Never equal to any
    /// declared expected value, itself included.
    Error,
}

impl Binding {
    /// Returns true if this is the ERROR sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self, Binding::Error)
    }

    /// Returns the type name of this binding.
    pub fn type_name(&self) -> &str {
        match self {
            Binding::Value(value) => value.type_name(),
            Binding::Function(_) => "Function",
            Binding::Constructor(_) => "Constructor",
            Binding::Object(object) => object.type_name(),
            Binding::Namespace(_) => "Namespace",
            Binding::Error => "Error",
        }
    }

    /// Literal view of this binding, if it has one.
    ///
    /// Values convert directly; objects convert through
    /// [`HostObject::as_value`]; namespaces convert when every entry does.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Binding::Value(value) => Some(value.clone()),
            Binding::Object(object) => object.as_value(),
            Binding::Namespace(map) => {
                let mut out = crate::ValueMap::new();
                for (name, binding) in map {
                    out.insert(name.clone(), binding.to_value()?);
                }
                Some(Value::Map(out))
            }
            _ => None,
        }
    }

    /// Structural equality used for pass/fail comparison.
    ///
    /// The ERROR sentinel equals nothing. Functions, constructors, and
    /// objects compare by identity, except that an object with a literal
    /// view compares structurally against values.
    pub fn structural_eq(&self, other: &Binding) -> bool {
        match (self, other) {
            (Binding::Error, _) | (_, Binding::Error) => false,
            (Binding::Value(a), Binding::Value(b)) => a == b,
            (Binding::Function(a), Binding::Function(b))
            | (Binding::Constructor(a), Binding::Constructor(b)) => Rc::ptr_eq(a, b),
            (Binding::Object(a), Binding::Object(b)) => {
                Rc::ptr_eq(a, b)
                    || matches!((a.as_value(), b.as_value()), (Some(x), Some(y)) if x == y)
            }
            (Binding::Namespace(a), Binding::Namespace(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(name, binding)| {
                        b.get(name).is_some_and(|other| binding.structural_eq(other))
                    })
            }
            (a, b) => match (a.to_value(), b.to_value()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    /// Build a function binding from a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Binding], &Kwargs) -> HostResult<Binding> + 'static,
    {
        Binding::Function(Rc::new(f))
    }

    /// Build a constructor binding from a closure.
    pub fn constructor<F>(f: F) -> Self
    where
        F: Fn(&[Binding], &Kwargs) -> HostResult<Binding> + 'static,
    {
        Binding::Constructor(Rc::new(f))
    }

    /// Build an object binding from a host instance.
    pub fn object(object: impl HostObject + 'static) -> Self {
        Binding::Object(Rc::new(object))
    }

    /// Build a value binding.
    pub fn value(value: impl Into<Value>) -> Self {
        Binding::Value(value.into())
    }
}

impl From<Value> for Binding {
    fn from(value: Value) -> Self {
        Binding::Value(value)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Value(value) => write!(f, "Value({:?})", value),
            Binding::Function(_) => write!(f, "Function(..)"),
            Binding::Constructor(_) => write!(f, "Constructor(..)"),
            Binding::Object(object) => write!(f, "Object({})", object.type_name()),
            Binding::Namespace(map) => {
                write!(f, "Namespace({:?})", map.keys().collect::<Vec<_>>())
            }
            Binding::Error => write!(f, "Error"),
        }
    }
}

/// Renders the binding for reporting, mirroring the value JSON rendering.
impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Error => write!(f, "ERROR"),
            other => match other.to_value() {
                Some(value) => write!(f, "{}", value),
                None => write!(f, "<{}>", other.type_name()),
            },
        }
    }
}

/// Extract the package name argument of `$import`.
///
/// Accepts either a plain string or the normalized `{pkg}` set-literal
/// shorthand (a single-key mapping).
pub fn import_package_name(args: &[Binding]) -> HostResult<String> {
    let first = args
        .first()
        .ok_or_else(|| HostError::invalid_arguments("$import expects a package name"))?;
    match first {
        Binding::Value(Value::String(name)) => Ok(name.clone()),
        Binding::Value(Value::Map(map)) if map.len() == 1 => {
            Ok(map.keys().next().cloned().unwrap_or_default())
        }
        other => Err(HostError::invalid_arguments(format!(
            "$import expects a package name, got {}",
            other.type_name()
        ))),
    }
}
