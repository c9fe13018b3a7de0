//! Contains chains for text subjects.
//!
//! Entry points live on `Expect` for any subject that lends itself as `&str`:
//! - `to_contain()` - positive chain, case-sensitive, at least one occurrence
//! - `not_to_contain()` - negated chain: no target may occur at all
//!
//! Decorator calls refine the chain; a search target call evaluates it and
//! hands the `Expect` back with one composite assertion appended.

use std::fmt::Display;

use regex::{Regex, RegexBuilder};

use crate::assertion::{Assertion, GroupKind};
use crate::description::Description;
use crate::expect::Expect;

use super::decorator::{require_nonzero_minimum, require_targets, Bound, CaseMode, Decorator};
use super::search::{DefaultSearcher, Searcher};

impl<S: AsRef<str>> Expect<S> {
    /// Start a contains chain for this text subject.
    ///
    /// Defaults: case-sensitive, at least one occurrence per target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect("foo bar").to_contain().value("o").verify();
    /// expect("foo bar").to_contain().at_least(2).value("o").verify();
    /// ```
    pub fn to_contain(self) -> TextContains<S> {
        TextContains::with_searcher(self, Box::new(DefaultSearcher))
    }

    /// Start a negated contains chain: no target may occur at all.
    ///
    /// Negated chains take no occurrence bound; the absence requirement is
    /// the bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect("foo bar").not_to_contain().value("baz").verify();
    /// ```
    pub fn not_to_contain(self) -> TextContainsNot<S> {
        TextContainsNot::with_searcher(self, Box::new(DefaultSearcher))
    }
}

/// Builder for a positive text contains chain.
pub struct TextContains<S> {
    expect: Expect<S>,
    decorator: Decorator,
    searcher: Box<dyn Searcher>,
}

impl<S: AsRef<str>> TextContains<S> {
    /// Start a chain bound to a custom search engine.
    pub fn with_searcher(expect: Expect<S>, searcher: Box<dyn Searcher>) -> Self {
        Self {
            expect,
            decorator: Decorator::default(),
            searcher,
        }
    }

    // =========================================================================
    // Decorator methods (chainable)
    // =========================================================================

    /// Compare ignoring letter case.
    ///
    /// Regex targets are compiled case-insensitively under this decorator.
    pub fn ignoring_case(mut self) -> Self {
        self.decorator.case = CaseMode::Insensitive;
        self
    }

    /// Require at least `n` occurrences per target.
    ///
    /// # Panics
    ///
    /// Panics when `n` is zero: such a chain would hold for every subject.
    pub fn at_least(mut self, n: usize) -> Self {
        require_nonzero_minimum(n);
        self.decorator.bound = Bound::AtLeast(n);
        self
    }

    /// Require at most `n` occurrences per target. `at_most(0)` is legal and
    /// equivalent to requiring absence.
    pub fn at_most(mut self, n: usize) -> Self {
        self.decorator.bound = Bound::AtMost(n);
        self
    }

    /// Require exactly `n` occurrences per target. `exactly(0)` is legal and
    /// passes when the target never occurs.
    pub fn exactly(mut self, n: usize) -> Self {
        self.decorator.bound = Bound::Exactly(n);
        self
    }

    // =========================================================================
    // Search targets (evaluate immediately)
    // =========================================================================

    /// Search for the string form of `target`.
    ///
    /// Non-text targets are coerced through `Display`, so
    /// `expect("v1.2").to_contain().value(1)` searches for `"1"`.
    ///
    /// # Panics
    ///
    /// Panics when the coerced target is empty.
    pub fn value(self, target: impl Display) -> Expect<S> {
        self.values([target])
    }

    /// Search for each target; every one must satisfy the bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect("foo bar").to_contain().values(["foo", "bar"]).verify();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `targets` is empty or any coerced target is empty.
    pub fn values<V: Display>(self, targets: impl IntoIterator<Item = V>) -> Expect<S> {
        let needles: Vec<String> = targets.into_iter().map(|t| t.to_string()).collect();
        let Self {
            expect,
            decorator,
            searcher,
        } = self;
        finish_values(expect, decorator, searcher.as_ref(), false, needles)
    }

    /// Search with a regular expression.
    ///
    /// Matches are counted non-overlapping, left to right; the pattern is
    /// compiled case-insensitively when `ignoring_case` was applied.
    ///
    /// # Panics
    ///
    /// Panics when the pattern does not compile.
    pub fn regex(self, pattern: &str) -> Expect<S> {
        let Self {
            expect,
            decorator,
            searcher,
        } = self;
        let compiled = compile_pattern(pattern, decorator.case);
        finish_regex(expect, decorator, searcher.as_ref(), false, pattern, &compiled)
    }
}

/// Builder for a negated text contains chain.
///
/// Exposes no occurrence bounds: a negated chain passes iff none of its
/// targets occur.
pub struct TextContainsNot<S> {
    expect: Expect<S>,
    decorator: Decorator,
    searcher: Box<dyn Searcher>,
}

impl<S: AsRef<str>> TextContainsNot<S> {
    /// Start a negated chain bound to a custom search engine.
    pub fn with_searcher(expect: Expect<S>, searcher: Box<dyn Searcher>) -> Self {
        Self {
            expect,
            decorator: Decorator::negated(),
            searcher,
        }
    }

    /// Compare ignoring letter case.
    pub fn ignoring_case(mut self) -> Self {
        self.decorator.case = CaseMode::Insensitive;
        self
    }

    /// Require the string form of `target` to be absent.
    ///
    /// # Panics
    ///
    /// Panics when the coerced target is empty.
    pub fn value(self, target: impl Display) -> Expect<S> {
        self.values([target])
    }

    /// Require every target to be absent.
    ///
    /// # Panics
    ///
    /// Panics when `targets` is empty or any coerced target is empty.
    pub fn values<V: Display>(self, targets: impl IntoIterator<Item = V>) -> Expect<S> {
        let needles: Vec<String> = targets.into_iter().map(|t| t.to_string()).collect();
        let Self {
            expect,
            decorator,
            searcher,
        } = self;
        finish_values(expect, decorator, searcher.as_ref(), true, needles)
    }

    /// Require the pattern to never match.
    ///
    /// # Panics
    ///
    /// Panics when the pattern does not compile.
    pub fn regex(self, pattern: &str) -> Expect<S> {
        let Self {
            expect,
            decorator,
            searcher,
        } = self;
        let compiled = compile_pattern(pattern, decorator.case);
        finish_regex(expect, decorator, searcher.as_ref(), true, pattern, &compiled)
    }
}

// =========================================================================
// Shared evaluation
// =========================================================================

fn finish_values<S: AsRef<str>>(
    expect: Expect<S>,
    decorator: Decorator,
    searcher: &dyn Searcher,
    negated: bool,
    needles: Vec<String>,
) -> Expect<S> {
    require_targets(!needles.is_empty());
    for needle in &needles {
        require_nonempty_needle(needle);
    }

    let root = decorator.root_description(negated);
    let assertion = match expect.subject() {
        Some(subject) => {
            let children = needles
                .iter()
                .map(|needle| {
                    let count = searcher.count_value(subject.as_ref(), needle, decorator.case);
                    decorator.bound.occurrence_assertion(
                        Description::Value,
                        format!("{:?}", needle),
                        count,
                    )
                })
                .collect();
            Assertion::group(GroupKind::All, root, None, children)
        }
        None => Assertion::unevaluable(root, None),
    };
    expect.append(assertion)
}

fn finish_regex<S: AsRef<str>>(
    expect: Expect<S>,
    decorator: Decorator,
    searcher: &dyn Searcher,
    negated: bool,
    pattern: &str,
    compiled: &Regex,
) -> Expect<S> {
    let root = decorator.root_description(negated);
    let assertion = match expect.subject() {
        Some(subject) => {
            let count = searcher.count_regex(subject.as_ref(), compiled);
            let child = decorator.bound.occurrence_assertion(
                Description::Regex,
                format!("{:?}", pattern),
                count,
            );
            Assertion::group(GroupKind::All, root, None, vec![child])
        }
        None => Assertion::unevaluable(root, None),
    };
    expect.append(assertion)
}

fn compile_pattern(pattern: &str, case: CaseMode) -> Regex {
    let compiled = RegexBuilder::new(pattern)
        .case_insensitive(case == CaseMode::Insensitive)
        .build();
    match compiled {
        Ok(regex) => regex,
        Err(error) => panic!(
            "invalid assertion configuration: regex {:?} does not compile: {}",
            pattern, error
        ),
    }
}

/// Reject an empty search string: its occurrence count is meaningless.
fn require_nonempty_needle(needle: &str) {
    if needle.is_empty() {
        panic!("invalid assertion configuration: cannot count occurrences of an empty string");
    }
}
