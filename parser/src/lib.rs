//! Packspec Parser
//!
//! This crate turns spec documents into parsed features:
//! - YAML document loading with set-literal normalization
//! - The compact feature-line grammar (filters, assignment, call vs. read)
//! - Skip filter evaluation against a target identifier
//! - Identifier camelization for cross-target consistency
//! - Canonical feature text reconstruction for reporting

mod convert;
mod document;
mod error;
mod feature;

pub use convert::yaml_to_value;
pub use document::{parse_document, Document, Stats};
pub use error::{ParseError, ParseResult};
pub use feature::{parse_feature, Feature, Target};
