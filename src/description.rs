//! Description keys for assertion reports.
//!
//! Every assertion carries a `Description` instead of a free-form string, so
//! reports can be re-worded (or translated) without touching assertion logic.

/// Description key attached to an assertion.
///
/// Keys are resolved to text through a [`Translator`](crate::report::Translator)
/// when a report is rendered; [`default_translation`](Description::default_translation)
/// provides the built-in English wording.
///
/// # Example
///
/// ```rust
/// use attest::Description;
///
/// assert_eq!(Description::Contains.default_translation(), "contains");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Description {
    /// Root of a case-sensitive contains check.
    Contains,
    /// Root of a case-insensitive contains check.
    ContainsIgnoringCase,
    /// Root of a negated, case-sensitive contains check.
    NotToContain,
    /// Root of a negated, case-insensitive contains check.
    NotToContainIgnoringCase,

    /// A search target compared by value.
    Value,
    /// A search target given as a regular expression.
    Regex,
    /// A search target given as a predicate over elements.
    ElementMatching,
    /// The occurrence count observed for one search target.
    NumberOfOccurrences,

    /// Lower occurrence bound.
    IsAtLeast,
    /// Upper occurrence bound.
    IsAtMost,
    /// Exact occurrence bound.
    IsExactly,
    /// Zero-occurrence bound used by negated chains.
    IsNotAtAll,

    /// A runtime type test, usually a down-cast.
    IsA,

    /// Equality with an expected value.
    Equals,
    /// Negated equality.
    NotToEqual,
    /// Strict less-than comparison.
    IsLessThan,
    /// Less-than-or-equal comparison.
    IsLessThanOrEqualTo,
    /// Strict greater-than comparison.
    IsGreaterThan,
    /// Greater-than-or-equal comparison.
    IsGreaterThanOrEqualTo,
    /// String prefix check.
    StartsWith,
    /// String suffix check.
    EndsWith,

    /// Marker child explaining that the subject itself was unavailable.
    CannotEvaluateSubject,
}

impl Description {
    /// Built-in English wording for this key.
    pub fn default_translation(&self) -> &'static str {
        match self {
            Description::Contains => "contains",
            Description::ContainsIgnoringCase => "contains, ignoring case",
            Description::NotToContain => "does not contain",
            Description::NotToContainIgnoringCase => "does not contain, ignoring case",
            Description::Value => "value",
            Description::Regex => "regex",
            Description::ElementMatching => "an element matching",
            Description::NumberOfOccurrences => "number of occurrences",
            Description::IsAtLeast => "is at least",
            Description::IsAtMost => "is at most",
            Description::IsExactly => "is exactly",
            Description::IsNotAtAll => "is not at all",
            Description::IsA => "is a",
            Description::Equals => "equals",
            Description::NotToEqual => "does not equal",
            Description::IsLessThan => "is less than",
            Description::IsLessThanOrEqualTo => "is less than or equal to",
            Description::IsGreaterThan => "is greater than",
            Description::IsGreaterThanOrEqualTo => "is greater than or equal to",
            Description::StartsWith => "starts with",
            Description::EndsWith => "ends with",
            Description::CannotEvaluateSubject => "cannot evaluate the subject",
        }
    }

    /// All known description keys.
    ///
    /// Useful for checking that a custom translator covers every key.
    pub fn all() -> &'static [Description] {
        &[
            Description::Contains,
            Description::ContainsIgnoringCase,
            Description::NotToContain,
            Description::NotToContainIgnoringCase,
            Description::Value,
            Description::Regex,
            Description::ElementMatching,
            Description::NumberOfOccurrences,
            Description::IsAtLeast,
            Description::IsAtMost,
            Description::IsExactly,
            Description::IsNotAtAll,
            Description::IsA,
            Description::Equals,
            Description::NotToEqual,
            Description::IsLessThan,
            Description::IsLessThanOrEqualTo,
            Description::IsGreaterThan,
            Description::IsGreaterThanOrEqualTo,
            Description::StartsWith,
            Description::EndsWith,
            Description::CannotEvaluateSubject,
        ]
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default_translation())
    }
}
