//! The compact feature-line grammar.
//!
//! One input node is either a plain string (narrative comment, optionally
//! filter-prefixed) or a single-key mapping whose key is the "left side"
//! (filter, assignment path, property path) and whose value is the "right
//! side" (arguments, keyword arguments, expected result).

use crate::convert::{yaml_key, yaml_to_value};
use crate::{ParseError, ParseResult};
use packspec_core::{Value, ValueMap};
use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;

/// The implementation identifier skip filters are evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Default for Target {
    /// The Rust implementation identifier.
    fn default() -> Self {
        Self::new("rs")
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One parsed statement from a spec document.
///
/// Either `comment` is set (narrative line), or at least one of
/// `assign`/`property` is set (executable line), never both.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Narrative text, set only for pure comment lines.
    pub comment: Option<String>,
    /// Whether this feature is excluded for the current target.
    pub skip: bool,
    /// Whether `property` denotes an invocation rather than a read.
    pub call: bool,
    /// Dotted scope path receiving the result.
    pub assign: Option<String>,
    /// Dotted scope path identifying the value or callable to access.
    pub property: Option<String>,
    /// Positional arguments, literal or reference, in encounter order.
    pub args: Vec<Value>,
    /// Keyword arguments, literal or reference, keys unique.
    pub kwargs: ValueMap,
    /// Expected result; absence means "must not raise".
    pub result: Option<Value>,
    /// Canonical re-serialization used for reporting.
    pub text: String,
}

impl Feature {
    /// Returns true if this is a pure narrative line.
    pub fn is_comment(&self) -> bool {
        self.comment.is_some()
    }
}

/// Parse one input node into a [`Feature`].
pub fn parse_feature(node: &serde_yaml::Value, target: &Target) -> ParseResult<Feature> {
    match node {
        serde_yaml::Value::String(text) => parse_comment(text, target),
        serde_yaml::Value::Mapping(mapping) if mapping.len() == 1 => {
            let (key, value) = mapping
                .iter()
                .next()
                .expect("mapping has exactly one entry");
            parse_statement(&yaml_key(key)?, value, target)
        }
        other => Err(ParseError::malformed(format!(
            "expected a string or single-key mapping, got {:?}",
            other
        ))),
    }
}

fn parse_comment(text: &str, target: &Target) -> ParseResult<Feature> {
    let captures = comment_regex()
        .captures(text)
        .ok_or_else(|| ParseError::malformed(format!("invalid comment line: {:?}", text)))?;
    let skip = captures
        .get(1)
        .map(|filter| evaluate_filter(filter.as_str(), target))
        .unwrap_or(false);
    let comment = captures
        .get(2)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Ok(Feature {
        comment: Some(comment.clone()),
        skip,
        call: false,
        assign: None,
        property: None,
        args: Vec::new(),
        kwargs: ValueMap::new(),
        result: None,
        text: comment,
    })
}

fn parse_statement(
    left: &str,
    right: &serde_yaml::Value,
    target: &Target,
) -> ParseResult<Feature> {
    // Left side
    let left = camelize(left);
    let captures = left_regex()
        .captures(&left)
        .ok_or_else(|| ParseError::malformed(format!("invalid left side: {:?}", left)))?;
    let skip = captures
        .get(1)
        .map(|filter| evaluate_filter(filter.as_str(), target))
        .unwrap_or(false);
    let assign = captures
        .get(2)
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty());
    let mut property = captures
        .get(3)
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty());
    if assign.is_none() && property.is_none() {
        return Err(ParseError::malformed(format!(
            "left side names neither an assignment nor a property: {:?}",
            left
        )));
    }
    // A non-empty property defaults to an invocation; the trailing `==`
    // rewrite forces a plain read-and-compare.
    let mut call = false;
    if let Some(path) = &mut property {
        call = true;
        if let Some(stripped) = path.strip_suffix("==") {
            if stripped.is_empty() {
                return Err(ParseError::malformed("empty property before `==`"));
            }
            *path = stripped.to_string();
            call = false;
        }
    }

    // Right side
    let mut args = Vec::new();
    let mut kwargs = ValueMap::new();
    let mut result = None;
    if call {
        let entries: Vec<serde_yaml::Value> = match right {
            serde_yaml::Value::Null => Vec::new(),
            serde_yaml::Value::Sequence(items) => items.clone(),
            other => vec![other.clone()],
        };
        for entry in entries {
            if let serde_yaml::Value::Mapping(map) = &entry {
                if map.len() == 1 {
                    let (key, value) = map.iter().next().expect("single entry");
                    let key = yaml_key(key)?;
                    if key == "==" {
                        result = declared_result(yaml_to_value(value)?);
                        continue;
                    }
                    if let Some(name) = key.strip_suffix('=') {
                        kwargs.insert(name.to_string(), yaml_to_value(value)?);
                        continue;
                    }
                }
            }
            args.push(yaml_to_value(&entry)?);
        }
    } else {
        result = declared_result(yaml_to_value(right)?);
    }

    let text = render_text(&assign, &property, call, &args, &kwargs, &result);

    Ok(Feature {
        comment: None,
        skip,
        call,
        assign,
        property,
        args,
        kwargs,
        result,
        text,
    })
}

/// An explicit null expectation is indistinguishable from an omitted one in
/// the document format, so both mean "must not raise".
fn declared_result(value: Value) -> Option<Value> {
    (!value.is_null()).then_some(value)
}

/// Reconstruct the canonical feature text from the normalized fields.
fn render_text(
    assign: &Option<String>,
    property: &Option<String>,
    call: bool,
    args: &[Value],
    kwargs: &ValueMap,
    result: &Option<Value>,
) -> String {
    let mut text = property.clone().unwrap_or_default();
    if let Some(assign_path) = assign {
        let value_text = match property {
            Some(path) => path.clone(),
            None => result
                .as_ref()
                .map(|value| value.to_string())
                .unwrap_or_else(|| "null".to_string()),
        };
        text = format!("{} = {}", assign_path, value_text);
    }
    if call {
        let mut items: Vec<String> = args.iter().map(|value| value.to_string()).collect();
        items.extend(
            kwargs
                .iter()
                .map(|(name, value)| format!("{}={}", name, value)),
        );
        text = format!("{}({})", text, items.join(", "));
    }
    if assign.is_none() {
        if let Some(expected) = result {
            text = format!("{} == {}", text, expected);
        }
    }
    prettify_references(&text)
}

/// Render reference literals as their bare path: `{"a.b":null}` becomes `a.b`.
fn prettify_references(text: &str) -> String {
    reference_regex().replace_all(text, "$1").into_owned()
}

/// Evaluate a pipe-separated filter expression against the target.
///
/// A plain list is an allow-list: skip when the target is absent. A leading
/// `not` token inverts the test: skip when the target is present in the rest.
fn evaluate_filter(expression: &str, target: &Target) -> bool {
    let tokens: Vec<&str> = expression.split('|').collect();
    match tokens.split_first() {
        Some((&"not", rest)) => rest.iter().any(|token| *token == target.id()),
        _ => !tokens.iter().any(|token| *token == target.id()),
    }
}

/// Normalize underscore identifiers to lowerCamel for cross-target
/// consistency: `to_string` becomes `toString`. Applied to the whole left
/// side, so every segment of a dotted path is normalized. A leading
/// underscore leaves the identifier untouched.
fn camelize(input: &str) -> String {
    match input.find('_') {
        Some(position) if position > 0 => {}
        _ => return input.to_string(),
    }
    let mut out = String::with_capacity(input.len());
    for (index, piece) in input.split('_').enumerate() {
        let mut chars = piece.chars();
        let Some(first) = chars.next() else { continue };
        if index == 0 {
            out.extend(first.to_lowercase());
        } else {
            out.extend(first.to_uppercase());
        }
        out.push_str(chars.as_str());
    }
    out
}

fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\((.*)\))?\s*(\w.*)$").expect("static pattern"))
}

fn left_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\((.*)\))?(?:([^=]*)=)?([^=].*)?$").expect("static pattern"))
}

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\{"([^{}]*?)":null\}"#).expect("static pattern"))
}
