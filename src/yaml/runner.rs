//! YAML suite execution using the fluent API.
//!
//! This module translates YAML check definitions into fluent contains
//! chains and collects the results. It acts as a thin adapter layer,
//! delegating all counting and report logic to the fluent API.

use crate::expect::{expect, AssertionError};

use super::parser::{coerce_target, Check, Subject, Suite, Target};

/// Result of evaluating a single check.
#[derive(Debug, Clone)]
pub enum CheckResult {
    /// Check passed.
    Pass,
    /// Check failed; `reason` is the rendered failure report.
    Fail { reason: String },
}

impl CheckResult {
    /// Check if this result is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass)
    }

    /// Check if this result is a failure.
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckResult::Fail { .. })
    }
}

impl From<Result<(), AssertionError>> for CheckResult {
    fn from(result: Result<(), AssertionError>) -> Self {
        match result {
            Ok(()) => CheckResult::Pass,
            Err(error) => CheckResult::Fail {
                reason: error.to_string(),
            },
        }
    }
}

/// Run every check in a suite against its subject.
///
/// Expects a validated suite; [`load_suite`](super::load_suite) validates
/// on load. Checks never panic the runner: each one evaluates without
/// panicking and failures carry the full report as their reason.
///
/// # Example
///
/// ```rust,ignore
/// let suite = load_suite(path)?;
/// let results = run_suite(&suite);
///
/// for (description, result) in &results {
///     match result {
///         CheckResult::Pass => println!("✓ {}", description),
///         CheckResult::Fail { reason } => println!("✗ {} - {}", description, reason),
///     }
/// }
/// ```
pub fn run_suite(suite: &Suite) -> Vec<(String, CheckResult)> {
    suite
        .checks
        .iter()
        .map(|check| (describe_check(check), run_check(&suite.subject, check)))
        .collect()
}

// =========================================================================
// Internal: Delegation to fluent API
// =========================================================================

fn run_check(subject: &Subject, check: &Check) -> CheckResult {
    let targets: Vec<Target> = check
        .contains
        .iter()
        .filter_map(|value| coerce_target(subject, value))
        .collect();

    match subject {
        Subject::Text(text) => run_text_check(text, check, &targets).into(),
        Subject::Numbers(numbers) => run_number_check(numbers, check, &targets).into(),
    }
}

fn run_text_check(text: &str, check: &Check, targets: &[Target]) -> Result<(), AssertionError> {
    let needles: Vec<&str> = targets.iter().filter_map(Target::as_text).collect();

    if check.not {
        let mut chain = expect(text).not_to_contain();
        if check.ignore_case {
            chain = chain.ignoring_case();
        }
        return chain.values(needles).evaluate();
    }

    let mut chain = expect(text).to_contain();
    if check.ignore_case {
        chain = chain.ignoring_case();
    }
    if let Some(n) = check.at_least {
        chain = chain.at_least(n as usize);
    }
    if let Some(n) = check.at_most {
        chain = chain.at_most(n as usize);
    }
    if let Some(n) = check.exactly {
        chain = chain.exactly(n as usize);
    }
    chain.values(needles).evaluate()
}

fn run_number_check(
    numbers: &[i64],
    check: &Check,
    targets: &[Target],
) -> Result<(), AssertionError> {
    let wanted: Vec<i64> = targets.iter().filter_map(Target::as_number).collect();

    if check.not {
        return expect(numbers.to_vec())
            .not_to_contain_elements()
            .values(wanted)
            .evaluate();
    }

    let mut chain = expect(numbers.to_vec()).to_contain_elements();
    if let Some(n) = check.at_least {
        chain = chain.at_least(n as usize);
    }
    if let Some(n) = check.at_most {
        chain = chain.at_most(n as usize);
    }
    if let Some(n) = check.exactly {
        chain = chain.exactly(n as usize);
    }
    chain.values(wanted).evaluate()
}

// =========================================================================
// Formatting helpers
// =========================================================================

fn describe_check(check: &Check) -> String {
    let verb = if check.not {
        "does not contain"
    } else {
        "contains"
    };

    let targets: Vec<String> = check.contains.iter().map(format_target).collect();

    let mut qualifiers: Vec<String> = Vec::new();
    if let Some(n) = check.at_least {
        qualifiers.push(format!("at least {}", n));
    }
    if let Some(n) = check.at_most {
        qualifiers.push(format!("at most {}", n));
    }
    if let Some(n) = check.exactly {
        qualifiers.push(format!("exactly {}", n));
    }
    if check.ignore_case {
        qualifiers.push("ignoring case".to_string());
    }

    let mut description = format!("{} {}", verb, targets.join(", "));
    if !qualifiers.is_empty() {
        description.push_str(&format!(" ({})", qualifiers.join(", ")));
    }
    description
}

fn format_target(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(text) => format!("{:?}", text),
        serde_yaml::Value::Number(number) => number.to_string(),
        serde_yaml::Value::Bool(flag) => flag.to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_check(targets: Vec<&str>) -> Check {
        Check {
            contains: targets
                .into_iter()
                .map(|t| serde_yaml::Value::String(t.to_string()))
                .collect(),
            not: false,
            ignore_case: false,
            at_least: None,
            at_most: None,
            exactly: None,
        }
    }

    fn number_target(n: i64) -> serde_yaml::Value {
        serde_yaml::Value::Number(n.into())
    }

    fn text_suite(subject: &str, checks: Vec<Check>) -> Suite {
        Suite {
            name: "suite".to_string(),
            subject: Subject::Text(subject.to_string()),
            checks,
        }
    }

    fn number_suite(numbers: Vec<i64>, checks: Vec<Check>) -> Suite {
        Suite {
            name: "suite".to_string(),
            subject: Subject::Numbers(numbers),
            checks,
        }
    }

    #[test]
    fn test_run_suite_basic_pass() {
        let suite = text_suite("hello world", vec![make_check(vec!["hello"])]);
        let results = run_suite(&suite);

        assert_eq!(results.len(), 1);
        assert!(results[0].1.is_pass());
    }

    #[test]
    fn test_run_suite_failure_carries_report() {
        let suite = text_suite("hello world", vec![make_check(vec!["xyz"])]);
        let results = run_suite(&suite);

        assert!(results[0].1.is_fail());
        match &results[0].1 {
            CheckResult::Fail { reason } => {
                assert!(reason.contains("expected that subject"));
                assert!(reason.contains("number of occurrences: 0"));
            }
            CheckResult::Pass => unreachable!(),
        }
    }

    #[test]
    fn test_run_suite_negated() {
        let suite = text_suite(
            "hello world",
            vec![
                Check {
                    not: true,
                    ..make_check(vec!["bye"])
                },
                Check {
                    not: true,
                    ..make_check(vec!["hello"])
                },
            ],
        );
        let results = run_suite(&suite);

        assert!(results[0].1.is_pass());
        assert!(results[1].1.is_fail());
    }

    #[test]
    fn test_run_suite_ignore_case() {
        let suite = text_suite(
            "Hello World",
            vec![Check {
                ignore_case: true,
                ..make_check(vec!["hello"])
            }],
        );
        let results = run_suite(&suite);

        assert!(results[0].1.is_pass());
    }

    #[test]
    fn test_run_suite_bounds() {
        let suite = text_suite(
            "foo bar",
            vec![
                Check {
                    at_least: Some(2),
                    ..make_check(vec!["o"])
                },
                Check {
                    exactly: Some(1),
                    ..make_check(vec!["o"])
                },
            ],
        );
        let results = run_suite(&suite);

        assert!(results[0].1.is_pass());
        assert!(results[1].1.is_fail());
    }

    #[test]
    fn test_run_suite_number_subject() {
        let mut suite = number_suite(
            vec![1, 2, 2, 3],
            vec![Check {
                exactly: Some(2),
                ..make_check(vec![])
            }],
        );
        suite.checks[0].contains = vec![number_target(2)];
        let results = run_suite(&suite);

        assert!(results[0].1.is_pass());
    }

    #[test]
    fn test_run_suite_number_subject_negated() {
        let mut suite = number_suite(
            vec![1, 2, 3],
            vec![Check {
                not: true,
                ..make_check(vec![])
            }],
        );
        suite.checks[0].contains = vec![number_target(9)];
        let results = run_suite(&suite);

        assert!(results[0].1.is_pass());
    }

    #[test]
    fn test_run_suite_coerces_number_targets_for_text() {
        let mut suite = text_suite("v1.2", vec![make_check(vec![])]);
        suite.checks[0].contains = vec![number_target(1)];
        let results = run_suite(&suite);

        assert!(results[0].1.is_pass());
    }

    #[test]
    fn test_run_suite_keeps_check_order() {
        let suite = text_suite(
            "hello world",
            vec![make_check(vec!["hello"]), make_check(vec!["world"])],
        );
        let results = run_suite(&suite);

        assert_eq!(results[0].0, "contains \"hello\"");
        assert_eq!(results[1].0, "contains \"world\"");
    }

    #[test]
    fn test_describe_check() {
        assert_eq!(describe_check(&make_check(vec!["a", "b"])), "contains \"a\", \"b\"");
        assert_eq!(
            describe_check(&Check {
                not: true,
                ..make_check(vec!["a"])
            }),
            "does not contain \"a\""
        );
        assert_eq!(
            describe_check(&Check {
                at_least: Some(2),
                ignore_case: true,
                ..make_check(vec!["o"])
            }),
            "contains \"o\" (at least 2, ignoring case)"
        );
    }
}
