//! Contains-assertion chains.
//!
//! A chain starts on an [`Expect`](crate::expect::Expect), collects
//! decorations, and evaluates when a search target arrives:
//!
//! 1. Entry: `to_contain()` / `not_to_contain()` for text,
//!    `to_contain_elements()` / `not_to_contain_elements()` for collections.
//! 2. Decorators: `ignoring_case()` (text only), `at_least(n)`, `at_most(n)`,
//!    `exactly(n)` (positive chains only).
//! 3. Search target: `value(..)`, `values(..)`, `regex(..)` (text only),
//!    `matching(..)` (collections only). This counts occurrences, appends one
//!    composite assertion, and hands the `Expect` back.
//!
//! Each target contributes its own subtree to the report, so a multi-target
//! failure shows which targets missed their bound and by how much:
//!
//! ```text
//! ✗ contains
//!   ✓ value: "o"
//!     ✓ number of occurrences: 2
//!       ✓ is at least: 1
//!   ✗ value: "baz"
//!     ✗ number of occurrences: 0
//!       ✗ is at least: 1
//! ```
//!
//! # Example
//!
//! ```rust
//! use attest::expect;
//!
//! expect("hello world")
//!     .to_contain()
//!     .ignoring_case()
//!     .at_least(2)
//!     .value("L")
//!     .verify();
//!
//! expect(vec![1, 2, 2, 3])
//!     .to_contain_elements()
//!     .exactly(2)
//!     .value(2)
//!     .verify();
//! ```
//!
//! Counting is non-overlapping and left to right: `"aaa"` contains `"aa"`
//! once. Custom counting strategies plug in through the [`Searcher`] trait.

mod decorator;
mod search;
mod sequence;
mod text;

pub use decorator::{Bound, CaseMode, Decorator};
pub use search::{DefaultSearcher, Searcher};
pub use sequence::{SequenceContains, SequenceContainsNot};
pub use text::{TextContains, TextContainsNot};

#[cfg(test)]
mod tests;
