//! Contains chains for collection subjects.
//!
//! Entry points live on `Expect<Vec<E>>`:
//! - `to_contain_elements()` - positive chain, at least one occurrence
//! - `not_to_contain_elements()` - negated chain: no target may occur
//!
//! Targets are matched by equality (`value`/`values`) or by predicate
//! (`matching`). Case decoration does not exist here; it is a text concern.

use std::fmt;

use crate::assertion::{Assertion, GroupKind};
use crate::description::Description;
use crate::expect::Expect;

use super::decorator::{require_nonzero_minimum, require_targets, Bound, Decorator};

impl<E: fmt::Debug> Expect<Vec<E>> {
    /// Start a contains chain for this collection subject.
    ///
    /// Defaults to requiring at least one occurrence per target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(vec![1, 2, 2, 3]).to_contain_elements().value(2).verify();
    /// expect(vec![1, 2, 2, 3])
    ///     .to_contain_elements()
    ///     .exactly(2)
    ///     .value(2)
    ///     .verify();
    /// ```
    pub fn to_contain_elements(self) -> SequenceContains<E> {
        SequenceContains {
            expect: self,
            decorator: Decorator::default(),
        }
    }

    /// Start a negated contains chain: no target may occur at all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(vec![1, 2, 3]).not_to_contain_elements().value(9).verify();
    /// ```
    pub fn not_to_contain_elements(self) -> SequenceContainsNot<E> {
        SequenceContainsNot {
            expect: self,
            decorator: Decorator::negated(),
        }
    }
}

/// Builder for a positive collection contains chain.
pub struct SequenceContains<E> {
    expect: Expect<Vec<E>>,
    decorator: Decorator,
}

impl<E: fmt::Debug> SequenceContains<E> {
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

    /// Require at most `n` occurrences per target.
    pub fn at_most(mut self, n: usize) -> Self {
        self.decorator.bound = Bound::AtMost(n);
        self
    }

    /// Require exactly `n` occurrences per target.
    pub fn exactly(mut self, n: usize) -> Self {
        self.decorator.bound = Bound::Exactly(n);
        self
    }

    /// Search for an element equal to `target`.
    pub fn value(self, target: E) -> Expect<Vec<E>>
    where
        E: PartialEq,
    {
        self.values([target])
    }

    /// Search for each target; every one must satisfy the bound.
    ///
    /// # Panics
    ///
    /// Panics when `targets` is empty.
    pub fn values(self, targets: impl IntoIterator<Item = E>) -> Expect<Vec<E>>
    where
        E: PartialEq,
    {
        let targets: Vec<E> = targets.into_iter().collect();
        finish_values(self.expect, self.decorator, false, &targets)
    }

    /// Count elements satisfying `predicate` and apply the bound to that
    /// count. `description` labels the predicate in reports.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(vec![1, 2, 3, 4])
    ///     .to_contain_elements()
    ///     .exactly(2)
    ///     .matching("an even number", |n| n % 2 == 0)
    ///     .verify();
    /// ```
    pub fn matching(
        self,
        description: impl Into<String>,
        predicate: impl Fn(&E) -> bool,
    ) -> Expect<Vec<E>> {
        finish_matching(self.expect, self.decorator, false, description.into(), predicate)
    }
}

/// Builder for a negated collection contains chain.
///
/// Exposes no occurrence bounds: a negated chain passes iff none of its
/// targets occur.
pub struct SequenceContainsNot<E> {
    expect: Expect<Vec<E>>,
    decorator: Decorator,
}

impl<E: fmt::Debug> SequenceContainsNot<E> {
    /// Require no element to equal `target`.
    pub fn value(self, target: E) -> Expect<Vec<E>>
    where
        E: PartialEq,
    {
        self.values([target])
    }

    /// Require no element to equal any target.
    ///
    /// # Panics
    ///
    /// Panics when `targets` is empty.
    pub fn values(self, targets: impl IntoIterator<Item = E>) -> Expect<Vec<E>>
    where
        E: PartialEq,
    {
        let targets: Vec<E> = targets.into_iter().collect();
        finish_values(self.expect, self.decorator, true, &targets)
    }

    /// Require no element to satisfy `predicate`.
    pub fn matching(
        self,
        description: impl Into<String>,
        predicate: impl Fn(&E) -> bool,
    ) -> Expect<Vec<E>> {
        finish_matching(self.expect, self.decorator, true, description.into(), predicate)
    }
}

// =========================================================================
// Shared evaluation
// =========================================================================

fn finish_values<E: fmt::Debug + PartialEq>(
    expect: Expect<Vec<E>>,
    decorator: Decorator,
    negated: bool,
    targets: &[E],
) -> Expect<Vec<E>> {
    require_targets(!targets.is_empty());

    let root = decorator.root_description(negated);
    let assertion = match expect.subject() {
        Some(elements) => {
            let children = targets
                .iter()
                .map(|target| {
                    let count = elements.iter().filter(|element| *element == target).count();
                    decorator.bound.occurrence_assertion(
                        Description::Value,
                        format!("{:?}", target),
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

fn finish_matching<E: fmt::Debug>(
    expect: Expect<Vec<E>>,
    decorator: Decorator,
    negated: bool,
    description: String,
    predicate: impl Fn(&E) -> bool,
) -> Expect<Vec<E>> {
    let root = decorator.root_description(negated);
    let assertion = match expect.subject() {
        Some(elements) => {
            let count = elements.iter().filter(|element| predicate(element)).count();
            let child = decorator.bound.occurrence_assertion(
                Description::ElementMatching,
                description,
                count,
            );
            Assertion::group(GroupKind::All, root, None, vec![child])
        }
        None => Assertion::unevaluable(root, None),
    };
    expect.append(assertion)
}
