//! Scenario tests exercising the contains chains end to end.

use crate::changer::reported;
use crate::description::Description;
use crate::expect::{expect, Expect};

/// An `Expect<String>` whose subject became absent through a failed change.
fn absent_text() -> Expect<String> {
    reported(
        expect("forty-two"),
        Description::IsA,
        "number",
        |_| false,
        |_| -> String { unreachable!() },
    )
}

// =========================================================================
// Text: positive chains
// =========================================================================

#[test]
fn test_contains_defaults_to_at_least_one() {
    expect("foo bar").to_contain().value("o").verify();
}

#[test]
fn test_contains_at_least() {
    expect("foo bar").to_contain().at_least(2).value("o").verify();
    assert!(expect("foo bar")
        .to_contain()
        .at_least(3)
        .value("o")
        .evaluate()
        .is_err());
}

#[test]
fn test_contains_at_most() {
    expect("foo bar").to_contain().at_most(2).value("o").verify();
    assert!(expect("foo bar")
        .to_contain()
        .at_most(1)
        .value("o")
        .evaluate()
        .is_err());
}

#[test]
fn test_contains_exactly() {
    expect("foo bar").to_contain().exactly(2).value("o").verify();
    assert!(expect("foo bar")
        .to_contain()
        .exactly(1)
        .value("o")
        .evaluate()
        .is_err());
}

#[test]
fn test_exactly_zero_passes_when_target_is_absent() {
    expect("foo bar").to_contain().exactly(0).value("z").verify();
}

#[test]
fn test_counting_is_non_overlapping() {
    expect("aaa").to_contain().exactly(1).value("aa").verify();
}

#[test]
fn test_string_subjects_work_like_str() {
    expect(String::from("hello")).to_contain().value("ell").verify();
}

#[test]
fn test_targets_are_coerced_through_display() {
    expect("v1.22").to_contain().exactly(2).value(2).verify();
}

#[test]
fn test_multiple_values_must_each_satisfy_the_bound() {
    expect("foo bar").to_contain().values(["foo", "bar"]).verify();
}

#[test]
fn test_report_shows_each_target_separately() {
    let error = expect("foo bar")
        .to_contain()
        .values(["o", "baz"])
        .evaluate()
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("✗ contains"));
    assert!(message.contains("✓ value: \"o\""));
    assert!(message.contains("✗ value: \"baz\""));
}

#[test]
fn test_failure_report_shape() {
    let error = expect("foo bar")
        .to_contain()
        .at_least(3)
        .value("o")
        .evaluate()
        .unwrap_err();

    let expected = "expected that subject: \"foo bar\"\n  \
                    ✗ contains\n    \
                    ✗ value: \"o\"\n      \
                    ✗ number of occurrences: 2\n        \
                    ✗ is at least: 3\n";
    assert_eq!(error.to_string(), expected);
}

// =========================================================================
// Text: ignoring case
// =========================================================================

#[test]
fn test_ignoring_case_matches_other_casing() {
    expect("foo bar")
        .to_contain()
        .ignoring_case()
        .at_least(2)
        .value("O")
        .verify();
}

#[test]
fn test_ignoring_case_failure_reports_true_count() {
    let error = expect("foo bar")
        .to_contain()
        .ignoring_case()
        .at_most(1)
        .value("O")
        .evaluate()
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("contains, ignoring case"));
    assert!(message.contains("number of occurrences: 2"));
    assert!(message.contains("is at most: 1"));
}

#[test]
fn test_decorator_order_does_not_matter() {
    expect("FOO").to_contain().at_most(3).ignoring_case().value("o").verify();
    expect("FOO").to_contain().ignoring_case().at_most(3).value("o").verify();
}

// =========================================================================
// Text: regex targets
// =========================================================================

#[test]
fn test_regex_counts_non_overlapping_matches() {
    expect("order 66 of 99").to_contain().exactly(2).regex("[0-9]+").verify();
}

#[test]
fn test_regex_ignoring_case() {
    expect("Foo foo FOO")
        .to_contain()
        .ignoring_case()
        .exactly(3)
        .regex("foo")
        .verify();
}

#[test]
fn test_regex_failure_shows_pattern() {
    let error = expect("abc")
        .to_contain()
        .regex("[0-9]+")
        .evaluate()
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("regex: \"[0-9]+\""));
    assert!(message.contains("number of occurrences: 0"));
}

#[test]
#[should_panic(expected = "invalid assertion configuration: regex")]
fn test_invalid_regex_is_a_configuration_error() {
    expect("abc").to_contain().regex("[");
}

// =========================================================================
// Text: negated chains
// =========================================================================

#[test]
fn test_not_to_contain_passes_when_absent() {
    expect("* - * -").not_to_contain().value("o").verify();
}

#[test]
fn test_not_to_contain_ignoring_case() {
    expect("* - * -").not_to_contain().ignoring_case().value("o").verify();
    assert!(expect("FOO")
        .not_to_contain()
        .ignoring_case()
        .value("o")
        .evaluate()
        .is_err());
}

#[test]
fn test_not_to_contain_failure_reports_occurrences() {
    let error = expect("foo").not_to_contain().value("o").evaluate().unwrap_err();

    let message = error.to_string();
    assert!(message.contains("does not contain"));
    assert!(message.contains("number of occurrences: 2"));
    assert!(message.contains("is not at all: 0"));
}

#[test]
fn test_not_to_contain_multiple_values() {
    expect("foo").not_to_contain().values(["x", "y"]).verify();
    assert!(expect("foo")
        .not_to_contain()
        .values(["x", "o"])
        .evaluate()
        .is_err());
}

#[test]
fn test_not_to_contain_regex() {
    expect("abc").not_to_contain().regex("[0-9]").verify();
}

// =========================================================================
// Configuration errors
// =========================================================================

#[test]
#[should_panic(expected = "invalid assertion configuration")]
fn test_empty_target_list_is_rejected() {
    expect("foo").to_contain().values(Vec::<String>::new());
}

#[test]
#[should_panic(expected = "invalid assertion configuration: at_least(0)")]
fn test_at_least_zero_is_rejected() {
    expect("foo").to_contain().at_least(0);
}

#[test]
#[should_panic(expected = "cannot count occurrences of an empty string")]
fn test_empty_search_string_is_rejected() {
    expect("foo").to_contain().value("");
}

// =========================================================================
// Absent subjects
// =========================================================================

#[test]
fn test_contains_on_absent_subject_cannot_evaluate() {
    let error = absent_text().to_contain().value("x").evaluate().unwrap_err();

    let message = error.to_string();
    assert!(message.contains("✗ contains"));
    assert!(message.contains("✗ cannot evaluate the subject"));
}

#[test]
fn test_negated_chain_on_absent_subject_cannot_evaluate() {
    let error = absent_text().not_to_contain().value("x").evaluate().unwrap_err();

    assert!(error.to_string().contains("cannot evaluate the subject"));
}

// =========================================================================
// Collections
// =========================================================================

#[test]
fn test_sequence_contains_value() {
    expect(vec![1, 2, 2, 3]).to_contain_elements().value(2).verify();
}

#[test]
fn test_sequence_exactly() {
    expect(vec![1, 2, 2, 3])
        .to_contain_elements()
        .exactly(2)
        .value(2)
        .verify();
    assert!(expect(vec![1, 2, 2, 3])
        .to_contain_elements()
        .exactly(1)
        .value(2)
        .evaluate()
        .is_err());
}

#[test]
fn test_sequence_reports_each_target_separately() {
    let error = expect(vec![1, 2, 3])
        .to_contain_elements()
        .values([1, 9])
        .evaluate()
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("✓ value: 1"));
    assert!(message.contains("✗ value: 9"));
}

#[test]
fn test_sequence_matching_counts_predicate_hits() {
    expect(vec![1, 2, 3, 4])
        .to_contain_elements()
        .exactly(2)
        .matching("an even number", |n| n % 2 == 0)
        .verify();
}

#[test]
fn test_sequence_matching_failure_shows_description() {
    let error = expect(vec![1, 3, 5])
        .to_contain_elements()
        .matching("an even number", |n| n % 2 == 0)
        .evaluate()
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("an element matching: an even number"));
    assert!(message.contains("number of occurrences: 0"));
}

#[test]
fn test_sequence_not_to_contain() {
    expect(vec![1, 2, 3]).not_to_contain_elements().value(9).verify();
    assert!(expect(vec![1, 2, 3])
        .not_to_contain_elements()
        .value(2)
        .evaluate()
        .is_err());
}

#[test]
fn test_sequence_not_matching() {
    expect(vec![1, 2])
        .not_to_contain_elements()
        .matching("a negative number", |n| *n < 0)
        .verify();
}

#[test]
fn test_sequence_with_string_elements() {
    expect(vec!["a".to_string(), "b".to_string()])
        .to_contain_elements()
        .value("a".to_string())
        .verify();
}

#[test]
#[should_panic(expected = "invalid assertion configuration")]
fn test_sequence_empty_target_list_is_rejected() {
    expect(vec![1]).to_contain_elements().values(Vec::<i32>::new());
}

#[test]
#[should_panic(expected = "invalid assertion configuration: at_least(0)")]
fn test_sequence_at_least_zero_is_rejected() {
    expect(vec![1]).to_contain_elements().at_least(0);
}

// =========================================================================
// Chains keep collecting
// =========================================================================

#[test]
fn test_failing_chain_still_records_later_assertions() {
    let result = expect("foo").to_contain().value("z").to_end_with("oo");

    assert_eq!(result.assertions().len(), 2);
    assert!(!result.assertions()[0].holds());
    assert!(result.assertions()[1].holds());
}

#[test]
fn test_two_contains_chains_on_one_subject() {
    expect("foo bar")
        .to_contain()
        .value("foo")
        .to_contain()
        .value("bar")
        .verify();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_verify_panics_on_failed_chain() {
    expect("foo").to_contain().value("baz").verify();
}
