//! Common error types.

use thiserror::Error;

/// Errors raised while resolving property paths against a scope.
#[derive(Debug, Clone, Error)]
pub enum ScopeError {
    /// A path segment matched no key in the current namespace.
    #[error("no {name} in the scope")]
    UnknownIdentifier { name: String },

    /// A path segment landed on a value that has no members.
    #[error("cannot resolve {member} on a {type_name} value")]
    NotTraversable { member: String, type_name: String },

    /// A member read on a host object failed.
    #[error("{0}")]
    Host(#[from] HostError),
}

impl ScopeError {
    pub fn unknown_identifier(name: impl Into<String>) -> Self {
        Self::UnknownIdentifier { name: name.into() }
    }

    pub fn not_traversable(member: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::NotTraversable {
            member: member.into(),
            type_name: type_name.into(),
        }
    }
}

/// Errors raised by host-registered functions, constructors, and objects.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// The import capability does not know the requested namespace.
    #[error("unknown import: {package}")]
    UnknownImport { package: String },

    /// A host object has no such member.
    #[error("no member {member} on {type_name}")]
    UnknownMember { type_name: String, member: String },

    /// Arguments did not match what the host entity expects.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// A fault raised by invoked host code.
    #[error("{message}")]
    Failure { message: String },
}

impl HostError {
    pub fn unknown_import(package: impl Into<String>) -> Self {
        Self::UnknownImport {
            package: package.into(),
        }
    }

    pub fn unknown_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// Result type for scope operations.
pub type ScopeResult<T> = Result<T, ScopeError>;

/// Result type for host invocations.
pub type HostResult<T> = Result<T, HostError>;
