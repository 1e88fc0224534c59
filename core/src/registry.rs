//! Host registration API.
//!
//! Other packspec runners recover host symbols by diffing the language
//! environment around an `eval` of embedded code. Here the host
//! registers named bindings and the import capability explicitly, before any
//! spec loads; the scope is seeded from the finished registry.

use crate::{Binding, HostError, HostResult, NamespaceMap, Value};
use std::rc::Rc;

/// The import capability: given a namespace identifier, return a binding
/// (normally a namespace of public names).
pub type ImportFn = Rc<dyn Fn(&str) -> HostResult<Binding>>;

/// An immutable set of host bindings plus the import capability.
pub struct Registry {
    bindings: NamespaceMap,
    import: ImportFn,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registered user bindings, in registration order.
    pub fn bindings(&self) -> &NamespaceMap {
        &self.bindings
    }

    /// Import a namespace by identifier.
    pub fn import(&self, package: &str) -> HostResult<Binding> {
        (self.import)(package)
    }

    /// A shareable handle to the import capability.
    pub fn import_fn(&self) -> ImportFn {
        Rc::clone(&self.import)
    }
}

impl Default for Registry {
    fn default() -> Self {
        RegistryBuilder::new().build()
    }
}

/// Builder for constructing an immutable [`Registry`].
pub struct RegistryBuilder {
    bindings: NamespaceMap,
    import: Option<ImportFn>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            bindings: NamespaceMap::new(),
            import: None,
        }
    }

    /// Register an arbitrary binding. A repeated name replaces the earlier
    /// registration.
    pub fn bind(mut self, name: impl Into<String>, binding: Binding) -> Self {
        self.bindings.insert(name.into(), binding);
        self
    }

    /// Register a plain value.
    pub fn value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bind(name, Binding::value(value))
    }

    /// Register an invocable function.
    pub fn function<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Binding], &crate::Kwargs) -> HostResult<Binding> + 'static,
    {
        self.bind(name, Binding::function(f))
    }

    /// Register a constructible type.
    pub fn constructor<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Binding], &crate::Kwargs) -> HostResult<Binding> + 'static,
    {
        self.bind(name, Binding::constructor(f))
    }

    /// Register the import capability.
    pub fn import<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> HostResult<Binding> + 'static,
    {
        self.import = Some(Rc::new(f));
        self
    }

    /// Finish the registry. Without a registered import capability, every
    /// import fails with [`HostError::UnknownImport`].
    pub fn build(self) -> Registry {
        Registry {
            bindings: self.bindings,
            import: self
                .import
                .unwrap_or_else(|| Rc::new(|package: &str| Err(HostError::unknown_import(package)))),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
