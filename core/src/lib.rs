//! Packspec Core Types
//!
//! This crate provides the foundational types used throughout packspec:
//! - Value types (the Value enum covering the spec literal domain)
//! - Binding (the tagged handle surface the dispatcher operates over)
//! - Scope (the ordered, mutable namespace property paths resolve against)
//! - Registry (the explicit host registration API, including `$import`)
//! - Common error types

mod binding;
mod error;
mod registry;
mod scope;
mod value;

pub use binding::*;
pub use error::*;
pub use registry::*;
pub use scope::*;
pub use value::*;
