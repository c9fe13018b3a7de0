//! Assertion tree model.
//!
//! Assertions are immutable data: a `Descriptive` leaf records one checked
//! fact, a `Group` combines children under all-of or any-of semantics.
//! Builders construct these trees and [`Expect`](crate::expect::Expect)
//! accumulates them; nothing here touches subjects or renders text.

use crate::description::Description;

/// How a group combines its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Holds iff every child holds. An empty group holds.
    All,
    /// Holds iff at least one child holds. An empty group does not hold.
    Any,
}

/// A node in an assertion tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Assertion {
    /// A single checked fact.
    Descriptive {
        /// What was checked.
        description: Description,
        /// Representation of the expected value, if the check has one.
        representation: Option<String>,
        /// Whether the check held.
        holds: bool,
    },
    /// A combination of child assertions.
    Group {
        /// How the children combine.
        kind: GroupKind,
        /// What the group as a whole checks.
        description: Description,
        /// Representation shown next to the group description, if any.
        representation: Option<String>,
        /// Child assertions, in construction order.
        assertions: Vec<Assertion>,
    },
}

impl Assertion {
    /// Create a leaf assertion.
    pub fn descriptive(
        description: Description,
        representation: Option<String>,
        holds: bool,
    ) -> Self {
        Assertion::Descriptive {
            description,
            representation,
            holds,
        }
    }

    /// Create a group assertion.
    pub fn group(
        kind: GroupKind,
        description: Description,
        representation: Option<String>,
        assertions: Vec<Assertion>,
    ) -> Self {
        Assertion::Group {
            kind,
            description,
            representation,
            assertions,
        }
    }

    /// A failing group used when an assertion is applied to an absent subject.
    ///
    /// The intended check is preserved as the group description, so the report
    /// still shows what would have been verified.
    pub fn unevaluable(description: Description, representation: Option<String>) -> Self {
        Assertion::group(
            GroupKind::All,
            description,
            representation,
            vec![Assertion::descriptive(
                Description::CannotEvaluateSubject,
                None,
                false,
            )],
        )
    }

    /// Whether this assertion holds, evaluating groups recursively.
    pub fn holds(&self) -> bool {
        match self {
            Assertion::Descriptive { holds, .. } => *holds,
            Assertion::Group {
                kind: GroupKind::All,
                assertions,
                ..
            } => assertions.iter().all(Assertion::holds),
            Assertion::Group {
                kind: GroupKind::Any,
                assertions,
                ..
            } => assertions.iter().any(Assertion::holds),
        }
    }

    /// The description of this node.
    pub fn description(&self) -> Description {
        match self {
            Assertion::Descriptive { description, .. } => *description,
            Assertion::Group { description, .. } => *description,
        }
    }

    /// The representation of this node, if any.
    pub fn representation(&self) -> Option<&str> {
        match self {
            Assertion::Descriptive { representation, .. } => representation.as_deref(),
            Assertion::Group { representation, .. } => representation.as_deref(),
        }
    }

    /// Child assertions of a group; empty for leaves.
    pub fn children(&self) -> &[Assertion] {
        match self {
            Assertion::Descriptive { .. } => &[],
            Assertion::Group { assertions, .. } => assertions,
        }
    }
}
