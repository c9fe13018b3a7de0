//! YAML check suite support.
//!
//! This module provides functionality for loading and running check suites
//! defined in YAML files. It acts as a thin layer on top of the fluent API,
//! handling deserialization, validation, and target coercion.
//!
//! # Suite File Format
//!
//! ```yaml
//! name: "Greeting"
//! subject: "Hello World"
//! checks:
//!   - contains: ["Hello", "World"]
//!   - contains: ["o"]
//!     at_least: 2
//!   - contains: ["hello"]
//!     ignore_case: true
//!   - contains: ["bye"]
//!     not: true
//! ```
//!
//! The subject is either text or a list of integers. Number subjects take
//! integer targets; text subjects also accept numbers and booleans, which
//! are searched for in their text form.
//!
//! # Example
//!
//! ```rust,ignore
//! use attest::{load_suite, run_suite};
//!
//! let suite = load_suite(Path::new("greeting.attest.yaml"))?;
//! let results = run_suite(&suite);
//! ```

mod parser;
mod runner;

pub use parser::{load_suite, validate, Check, Subject, Suite, YamlError};
pub use runner::{run_suite, CheckResult};
