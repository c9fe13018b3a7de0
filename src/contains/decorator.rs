//! Decoration carried by a contains chain, and chain-time validation.
//!
//! Decoration accumulates while a chain is built and is consumed when a
//! search target arrives. Malformed chains are rejected immediately at the
//! decorator call with an `invalid assertion configuration` panic, distinct
//! from the `assertion failed` panic of a failing `verify`.

use crate::assertion::{Assertion, GroupKind};
use crate::description::Description;

/// How text searches treat letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Exact comparison.
    #[default]
    Sensitive,
    /// Unicode-lowercased comparison.
    Insensitive,
}

/// Occurrence bound a per-target count must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Count must be at least `n`.
    AtLeast(usize),
    /// Count must be at most `n`.
    AtMost(usize),
    /// Count must be exactly `n`.
    Exactly(usize),
    /// Count must be zero. Used by negated chains.
    NotAtAll,
}

impl Bound {
    /// Whether `count` satisfies this bound.
    pub fn satisfied_by(self, count: usize) -> bool {
        match self {
            Bound::AtLeast(n) => count >= n,
            Bound::AtMost(n) => count <= n,
            Bound::Exactly(n) => count == n,
            Bound::NotAtAll => count == 0,
        }
    }

    /// Description key for this bound.
    pub fn description(self) -> Description {
        match self {
            Bound::AtLeast(_) => Description::IsAtLeast,
            Bound::AtMost(_) => Description::IsAtMost,
            Bound::Exactly(_) => Description::IsExactly,
            Bound::NotAtAll => Description::IsNotAtAll,
        }
    }

    /// Representation of the expected count.
    pub fn representation(self) -> String {
        match self {
            Bound::AtLeast(n) | Bound::AtMost(n) | Bound::Exactly(n) => n.to_string(),
            Bound::NotAtAll => "0".to_string(),
        }
    }

    /// Assertion subtree for one search target observed `count` times.
    ///
    /// Shape: target group, then the observed occurrence count, then this
    /// bound's verdict on it.
    pub(crate) fn occurrence_assertion(
        self,
        target_description: Description,
        target_representation: String,
        count: usize,
    ) -> Assertion {
        Assertion::group(
            GroupKind::All,
            target_description,
            Some(target_representation),
            vec![Assertion::group(
                GroupKind::All,
                Description::NumberOfOccurrences,
                Some(count.to_string()),
                vec![Assertion::descriptive(
                    self.description(),
                    Some(self.representation()),
                    self.satisfied_by(count),
                )],
            )],
        )
    }
}

/// Accumulated decoration for a contains chain.
///
/// Positive chains start case-sensitive with an at-least-one bound; negated
/// chains start with [`Bound::NotAtAll`]. Decorator methods on the builders
/// replace these until a search target is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorator {
    /// Case handling for text searches.
    pub case: CaseMode,
    /// Occurrence bound applied to every target.
    pub bound: Bound,
}

impl Default for Decorator {
    fn default() -> Self {
        Self {
            case: CaseMode::Sensitive,
            bound: Bound::AtLeast(1),
        }
    }
}

impl Decorator {
    /// Default decoration for a negated chain.
    pub fn negated() -> Self {
        Self {
            case: CaseMode::Sensitive,
            bound: Bound::NotAtAll,
        }
    }

    /// Root description for a chain using this decoration.
    pub(crate) fn root_description(self, negated: bool) -> Description {
        match (negated, self.case) {
            (false, CaseMode::Sensitive) => Description::Contains,
            (false, CaseMode::Insensitive) => Description::ContainsIgnoringCase,
            (true, CaseMode::Sensitive) => Description::NotToContain,
            (true, CaseMode::Insensitive) => Description::NotToContainIgnoringCase,
        }
    }
}

/// Reject a zero minimum: `at_least(0)` holds for every subject.
///
/// # Panics
///
/// Panics when `n` is zero.
pub(crate) fn require_nonzero_minimum(n: usize) {
    if n == 0 {
        panic!(
            "invalid assertion configuration: at_least(0) is satisfied by every subject; \
             use exactly(0) or a not-to-contain chain"
        );
    }
}

/// Reject a target-less chain.
///
/// # Panics
///
/// Panics when `has_targets` is false.
pub(crate) fn require_targets(has_targets: bool) {
    if !has_targets {
        panic!("invalid assertion configuration: a contains chain needs at least one search target");
    }
}
