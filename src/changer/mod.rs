//! Subject change: deriving a new assertion context from an existing one.
//!
//! Two flavors:
//! - [`unreported`] maps the subject silently; the derived context starts
//!   with an empty assertion list.
//! - [`reported`] (and the staged [`report_builder`]) gates the
//!   transformation behind a feasibility check and records the change itself
//!   as an assertion, so it shows up in reports either way.
//!
//! # Example
//!
//! ```rust
//! use attest::{expect, reported, Description};
//!
//! let parsed = reported(
//!     expect("17"),
//!     Description::IsA,
//!     "integer",
//!     |s: &&str| s.parse::<i32>().is_ok(),
//!     |s| s.parse::<i32>().unwrap_or_default(),
//! );
//! parsed.is_greater_than(10).verify();
//! ```

mod builder;
mod subject;

pub use builder::{
    report_builder, CheckStep, DescriptionStep, DownCastStep, FinalStep, TransformationStep,
};
pub use subject::{reported, reported_with, unreported};
