//! Spec document loading.
//!
//! A document is an ordered YAML sequence of feature nodes. The first node
//! must be a comment naming the package under test; comment lines set the
//! running skip state for the features that follow them.

use crate::feature::{parse_feature, Feature, Target};
use crate::{ParseError, ParseResult};
use regex_lite::Regex;
use std::sync::OnceLock;

/// Per-document feature counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Total feature count, comments included.
    pub features: usize,
    /// Narrative comment lines.
    pub comments: usize,
    /// Executable features, skipped or not.
    pub tests: usize,
    /// Executable features excluded for the current target.
    pub skipped: usize,
}

/// One parsed spec document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The first comment's text, identifying the subject under test.
    pub package: String,
    /// Ordered features; order is semantically significant.
    pub features: Vec<Feature>,
    /// Aggregated counts.
    pub stats: Stats,
}

/// Parse one spec document for the given target.
///
/// Returns `Ok(None)` when the document is not a spec for this target: a
/// malformed feature, a missing or filtered-out package comment, or a
/// non-sequence body all reject the document silently. Only YAML syntax
/// errors are reported to the caller.
pub fn parse_document(source: &str, target: &Target) -> ParseResult<Option<Document>> {
    // Everything after the first `---` separator holds per-language embedded
    // code in older spec files; host bindings come from the registry, so
    // only the leading document is read.
    let body = source.split("---\n").next().unwrap_or_default();
    let body = normalize_set_literals(body);
    let root: serde_yaml::Value = serde_yaml::from_str(&body)?;

    let Some(nodes) = root.as_sequence() else {
        return Ok(None);
    };
    if nodes.is_empty() {
        return Ok(None);
    }

    // Package
    let first = match parse_feature(&nodes[0], target) {
        Ok(feature) => feature,
        Err(ParseError::MalformedFeature { .. }) => return Ok(None),
        Err(error) => return Err(error),
    };
    let package = match (&first.comment, first.skip) {
        (Some(comment), false) => comment.clone(),
        _ => return Ok(None),
    };

    // Features
    let mut running_skip = false;
    let mut features = Vec::with_capacity(nodes.len());
    for node in nodes {
        let mut feature = match parse_feature(node, target) {
            Ok(feature) => feature,
            Err(ParseError::MalformedFeature { .. }) => return Ok(None),
            Err(error) => return Err(error),
        };
        if feature.is_comment() {
            running_skip = feature.skip;
        } else {
            feature.skip = feature.skip || running_skip;
        }
        features.push(feature);
    }

    // Stats
    let mut stats = Stats::default();
    for feature in &features {
        stats.features += 1;
        if feature.is_comment() {
            stats.comments += 1;
        } else {
            stats.tests += 1;
            if feature.skip {
                stats.skipped += 1;
            }
        }
    }

    Ok(Some(Document {
        package,
        features,
        stats,
    }))
}

/// Rewrite raw `{token}` compact-set literals to `{token: null}` mappings.
///
/// A documented quirk of the spec format: YAML sets have no stable parse
/// across implementations, so they are normalized before generic parsing.
fn normalize_set_literals(source: &str) -> String {
    set_literal_regex()
        .replace_all(source, "{$1: null}")
        .into_owned()
}

fn set_literal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([\w$]+)\}").expect("static pattern"))
}
