//! YAML suite parsing and validation.
//!
//! This module handles YAML deserialization and everything that can be
//! rejected before evaluation: malformed files, target-less checks,
//! conflicting occurrence bounds, and targets that do not fit the subject.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Error type for suite loading and validation issues.
#[derive(Debug, thiserror::Error)]
pub enum YamlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("check #{0}: 'contains' must list at least one target")]
    EmptyTargets(usize),

    #[error("check #{0}: at most one of 'at_least', 'at_most', 'exactly' may be set")]
    ConflictingBounds(usize),

    #[error("check #{0}: 'not' cannot be combined with an occurrence bound")]
    NegatedBound(usize),

    #[error("check #{0}: 'at_least: 0' is satisfied by every subject; use 'exactly: 0' or 'not'")]
    DegenerateAtLeastZero(usize),

    #[error("check #{0}: 'ignore_case' only applies to text subjects")]
    IgnoreCaseOnNonText(usize),

    #[error("check #{0}: unsupported target {1} for this subject")]
    UnsupportedTarget(usize, String),

    #[error("check #{0}: cannot count occurrences of an empty string")]
    EmptyTarget(usize),
}

/// A check suite loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct Suite {
    /// Human-readable name for this suite.
    pub name: String,
    /// The subject every check runs against.
    pub subject: Subject,
    /// Contains checks to evaluate against the subject.
    pub checks: Vec<Check>,
}

/// Subject of a suite: a piece of text or a list of integers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    /// Text subject; checks search for substrings.
    Text(String),
    /// Collection subject; checks search for elements.
    Numbers(Vec<i64>),
}

/// A single contains check.
#[derive(Debug, Deserialize)]
pub struct Check {
    /// Search targets (strings or numbers).
    pub contains: Vec<serde_yaml::Value>,
    /// Negate: require every target to be absent (default: false).
    #[serde(default)]
    pub not: bool,
    /// Compare ignoring letter case; text subjects only (default: false).
    #[serde(default)]
    pub ignore_case: bool,
    /// Require at least this many occurrences per target.
    pub at_least: Option<u64>,
    /// Require at most this many occurrences per target.
    pub at_most: Option<u64>,
    /// Require exactly this many occurrences per target.
    pub exactly: Option<u64>,
}

/// Load and validate a suite from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed
/// - Any check fails [`validate`]
///
/// # Example
///
/// ```rust,ignore
/// let suite = load_suite(Path::new("greeting.attest.yaml"))?;
/// println!("Running: {}", suite.name);
/// ```
pub fn load_suite(path: &Path) -> Result<Suite, YamlError> {
    let content = fs::read_to_string(path)?;
    let suite: Suite = serde_yaml::from_str(&content)?;
    validate(&suite)?;
    Ok(suite)
}

/// Validate a suite's checks against its subject.
///
/// Checks are numbered from 1 in error messages, matching their order in
/// the file.
///
/// # Errors
///
/// Returns the first problem found: a target-less check, more than one
/// occurrence bound, `not` combined with a bound, `at_least: 0`,
/// `ignore_case` on a non-text subject, or a target the subject cannot
/// search for.
pub fn validate(suite: &Suite) -> Result<(), YamlError> {
    for (index, check) in suite.checks.iter().enumerate() {
        let number = index + 1;

        if check.contains.is_empty() {
            return Err(YamlError::EmptyTargets(number));
        }

        let bounds = [check.at_least, check.at_most, check.exactly]
            .iter()
            .filter(|bound| bound.is_some())
            .count();
        if bounds > 1 {
            return Err(YamlError::ConflictingBounds(number));
        }
        if check.not && bounds > 0 {
            return Err(YamlError::NegatedBound(number));
        }
        if check.at_least == Some(0) {
            return Err(YamlError::DegenerateAtLeastZero(number));
        }
        if check.ignore_case && !matches!(suite.subject, Subject::Text(_)) {
            return Err(YamlError::IgnoreCaseOnNonText(number));
        }

        for value in &check.contains {
            match coerce_target(&suite.subject, value) {
                Some(Target::Text(text)) if text.is_empty() => {
                    return Err(YamlError::EmptyTarget(number));
                }
                Some(_) => {}
                None => {
                    return Err(YamlError::UnsupportedTarget(number, describe_value(value)));
                }
            }
        }
    }
    Ok(())
}

/// A check target coerced to the subject's domain.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Target {
    Text(String),
    Number(i64),
}

impl Target {
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            Target::Text(text) => Some(text),
            Target::Number(_) => None,
        }
    }

    pub(crate) fn as_number(&self) -> Option<i64> {
        match self {
            Target::Text(_) => None,
            Target::Number(n) => Some(*n),
        }
    }
}

/// Coerce a YAML target to the subject's domain.
///
/// Text subjects search for the text form of scalar targets, so
/// `contains: [1]` on a text subject searches for `"1"`. Number subjects
/// accept integer targets only.
pub(crate) fn coerce_target(subject: &Subject, value: &serde_yaml::Value) -> Option<Target> {
    match subject {
        Subject::Text(_) => match value {
            serde_yaml::Value::String(text) => Some(Target::Text(text.clone())),
            serde_yaml::Value::Number(number) => Some(Target::Text(number.to_string())),
            serde_yaml::Value::Bool(flag) => Some(Target::Text(flag.to_string())),
            _ => None,
        },
        Subject::Numbers(_) => value.as_i64().map(Target::Number),
    }
}

fn describe_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(flag) => flag.to_string(),
        serde_yaml::Value::Number(number) => number.to_string(),
        serde_yaml::Value::String(text) => format!("{:?}", text),
        serde_yaml::Value::Sequence(_) => "a sequence".to_string(),
        serde_yaml::Value::Mapping(_) => "a mapping".to_string(),
        serde_yaml::Value::Tagged(_) => "a tagged value".to_string(),
    }
}
