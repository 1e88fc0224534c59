//! Parser error types.

use thiserror::Error;

/// Errors raised while parsing spec documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A feature node violates the feature-line grammar. The containing
    /// document is discarded silently, never reported as a test failure.
    #[error("malformed feature: {reason}")]
    MalformedFeature { reason: String },

    /// The document is not valid YAML.
    #[error("invalid spec document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ParseError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFeature {
            reason: reason.into(),
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
