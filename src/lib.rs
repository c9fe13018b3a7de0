//! # attest
//!
//! A fluent assertion library with composable reports.
//!
//! Assertions collect instead of aborting: a chain records every check it
//! makes, and a failure renders the whole tree with pass/fail markers. The
//! library can be used with Rust's native `#[test]` framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::expect;
//!
//! expect("hello world")
//!     .to_contain()
//!     .value("world")
//!     .to_start_with("hello")
//!     .verify();
//! ```
//!
//! ## Occurrence Bounds and Case
//!
//! ```rust
//! use attest::expect;
//!
//! expect("foo bar")
//!     .to_contain()
//!     .ignoring_case()
//!     .at_least(2)
//!     .value("O")
//!     .verify();
//!
//! expect("foo bar").not_to_contain().value("baz").verify();
//! ```
//!
//! ## Non-Panicking Evaluation
//!
//! ```rust
//! use attest::expect;
//!
//! let result = expect("foo bar").to_contain().value("baz").evaluate();
//! let error = result.unwrap_err();
//! assert!(error.to_string().contains("number of occurrences: 0"));
//! ```
//!
//! ## Changing the Subject
//!
//! A subject change narrows what later assertions run against. When the
//! change is infeasible the failure is reported and dependent assertions
//! are skipped rather than run against a bogus subject:
//!
//! ```rust
//! use std::any::Any;
//! use attest::expect_any;
//!
//! let subject: Box<dyn Any> = Box::new(42_i32);
//! expect_any(subject)
//!     .down_cast_to::<i32>()
//!     .build()
//!     .is_greater_than(40)
//!     .verify();
//! ```

pub mod assertion;
mod basic;
pub mod changer;
pub mod contains;
pub mod description;
pub mod expect;
pub mod report;

#[cfg(feature = "yaml")]
pub mod config;
#[cfg(feature = "yaml")]
pub mod discovery;
#[cfg(feature = "yaml")]
pub mod yaml;

// Core types
pub use assertion::{Assertion, GroupKind};
pub use description::Description;
pub use expect::{expect, expect_any, AssertionError, Expect};

// Subject change
pub use changer::{report_builder, reported, reported_with, unreported};

// Contains chains
pub use contains::{
    Bound, CaseMode, DefaultSearcher, Searcher, SequenceContains, SequenceContainsNot,
    TextContains, TextContainsNot,
};

// Report rendering
pub use report::{render_failure, render_failure_with, DefaultTranslator, Translator};

// YAML (feature-gated)
#[cfg(feature = "yaml")]
pub use yaml::{load_suite, run_suite, Check, CheckResult, Subject, Suite, YamlError};
