//! Single-value assertions on `Expect`.
//!
//! The small building blocks of the fluent API: equality, order comparisons,
//! and string prefix/suffix checks. Each method appends one descriptive
//! assertion and evaluates immediately. The contains and subject-change
//! families live in their own modules.

use std::fmt;

use crate::assertion::Assertion;
use crate::description::Description;
use crate::expect::Expect;

impl<T: fmt::Debug> Expect<T> {
    /// Append one descriptive assertion about the current subject.
    ///
    /// An absent subject turns the check into an unevaluable assertion; the
    /// predicate never runs.
    fn check<E: fmt::Debug>(
        self,
        description: Description,
        expected: &E,
        holds: impl FnOnce(&T) -> bool,
    ) -> Self {
        let representation = Some(format!("{:?}", expected));
        let assertion = match self.subject() {
            Some(subject) => Assertion::descriptive(description, representation, holds(subject)),
            None => Assertion::unevaluable(description, representation),
        };
        self.append(assertion)
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Assert the subject equals the expected value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(10).to_equal(10).verify();
    /// ```
    pub fn to_equal(self, expected: T) -> Self
    where
        T: PartialEq,
    {
        self.check(Description::Equals, &expected, |subject| {
            *subject == expected
        })
    }

    /// Assert the subject does not equal the given value.
    pub fn not_to_equal(self, other: T) -> Self
    where
        T: PartialEq,
    {
        self.check(Description::NotToEqual, &other, |subject| *subject != other)
    }

    // =========================================================================
    // Order comparisons
    // =========================================================================

    /// Assert the subject is strictly less than `bound`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(10).is_less_than(11).verify();
    /// ```
    pub fn is_less_than(self, bound: T) -> Self
    where
        T: PartialOrd,
    {
        self.check(Description::IsLessThan, &bound, |subject| *subject < bound)
    }

    /// Assert the subject is less than or equal to `bound`.
    pub fn is_less_than_or_equal_to(self, bound: T) -> Self
    where
        T: PartialOrd,
    {
        self.check(Description::IsLessThanOrEqualTo, &bound, |subject| {
            *subject <= bound
        })
    }

    /// Assert the subject is strictly greater than `bound`.
    pub fn is_greater_than(self, bound: T) -> Self
    where
        T: PartialOrd,
    {
        self.check(Description::IsGreaterThan, &bound, |subject| {
            *subject > bound
        })
    }

    /// Assert the subject is greater than or equal to `bound`.
    pub fn is_greater_than_or_equal_to(self, bound: T) -> Self
    where
        T: PartialOrd,
    {
        self.check(Description::IsGreaterThanOrEqualTo, &bound, |subject| {
            *subject >= bound
        })
    }
}

impl<S: AsRef<str> + fmt::Debug> Expect<S> {
    /// Assert the text subject starts with `prefix`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect("foo bar").to_start_with("foo").verify();
    /// ```
    pub fn to_start_with(self, prefix: &str) -> Self {
        self.check(Description::StartsWith, &prefix, |subject| {
            subject.as_ref().starts_with(prefix)
        })
    }

    /// Assert the text subject ends with `suffix`.
    pub fn to_end_with(self, suffix: &str) -> Self {
        self.check(Description::EndsWith, &suffix, |subject| {
            subject.as_ref().ends_with(suffix)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::expect::expect;

    #[test]
    fn test_to_equal_passes() {
        expect(10).to_equal(10).verify();
        expect("foo").to_equal("foo").verify();
    }

    #[test]
    fn test_to_equal_fails_with_expected_in_report() {
        let error = expect(10).to_equal(9).evaluate().unwrap_err();
        let report = error.to_string();
        assert!(report.contains("expected that subject: 10"));
        assert!(report.contains("equals: 9"));
    }

    #[test]
    fn test_not_to_equal() {
        expect(10).not_to_equal(9).verify();
        assert!(expect(10).not_to_equal(10).evaluate().is_err());
    }

    #[test]
    fn test_is_less_than() {
        expect(10).is_less_than(11).verify();
        assert!(expect(10).is_less_than(10).evaluate().is_err());
        assert!(expect(10).is_less_than(9).evaluate().is_err());
    }

    #[test]
    fn test_is_less_than_report_names_bound() {
        let error = expect(10).is_less_than(10).evaluate().unwrap_err();
        assert!(error.to_string().contains("is less than: 10"));
    }

    #[test]
    fn test_is_less_than_or_equal_to() {
        expect(10).is_less_than_or_equal_to(10).verify();
        expect(10).is_less_than_or_equal_to(11).verify();
        assert!(expect(10).is_less_than_or_equal_to(9).evaluate().is_err());
    }

    #[test]
    fn test_is_less_than_or_equal_to_report_names_bound() {
        let error = expect(10)
            .is_less_than_or_equal_to(9)
            .evaluate()
            .unwrap_err();
        assert!(error.to_string().contains("is less than or equal to: 9"));
    }

    #[test]
    fn test_is_greater_than() {
        expect(10).is_greater_than(9).verify();
        assert!(expect(10).is_greater_than(10).evaluate().is_err());
        assert!(expect(10).is_greater_than(11).evaluate().is_err());
    }

    #[test]
    fn test_is_greater_than_report_names_bound() {
        let error = expect(10).is_greater_than(11).evaluate().unwrap_err();
        assert!(error.to_string().contains("is greater than: 11"));
    }

    #[test]
    fn test_is_greater_than_or_equal_to() {
        expect(10).is_greater_than_or_equal_to(10).verify();
        expect(10).is_greater_than_or_equal_to(9).verify();
        assert!(expect(10).is_greater_than_or_equal_to(11).evaluate().is_err());
    }

    #[test]
    fn test_is_greater_than_or_equal_to_report_names_bound() {
        let error = expect(10)
            .is_greater_than_or_equal_to(11)
            .evaluate()
            .unwrap_err();
        assert!(error
            .to_string()
            .contains("is greater than or equal to: 11"));
    }

    #[test]
    fn test_comparisons_work_on_floats() {
        expect(1.5).is_greater_than(1.0).verify();
        expect(1.5).is_less_than_or_equal_to(1.5).verify();
    }

    #[test]
    fn test_to_start_with() {
        expect("foo bar").to_start_with("foo").verify();
        assert!(expect("foo bar").to_start_with("bar").evaluate().is_err());
    }

    #[test]
    fn test_to_end_with() {
        expect("foo bar").to_end_with("bar").verify();
        assert!(expect("foo bar").to_end_with("foo").evaluate().is_err());
    }

    #[test]
    fn test_to_start_with_owned_subject() {
        expect(String::from("foo bar")).to_start_with("foo").verify();
    }

    #[test]
    fn test_chained_checks_collect_all() {
        let error = expect(10)
            .is_greater_than(11)
            .is_less_than(9)
            .evaluate()
            .unwrap_err();
        assert_eq!(error.assertions().len(), 2);
        let report = error.to_string();
        assert!(report.contains("is greater than: 11"));
        assert!(report.contains("is less than: 9"));
    }

    #[test]
    #[should_panic(expected = "is less than: 10")]
    fn test_verify_panic_message_contains_check() {
        expect(10).is_less_than(10).verify();
    }
}
