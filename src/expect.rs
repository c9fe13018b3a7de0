//! Entry points and the assertion context.
//!
//! This module provides the core types of the fluent API:
//! - `expect()` - Entry point for creating an assertion context from a subject
//! - `expect_any()` - Entry point for dynamically typed subjects
//! - `Expect` - Holds the subject and accumulates assertions
//! - `AssertionError` - Structured failure returned by `evaluate()`

use std::any::Any;
use std::fmt;

use crate::assertion::Assertion;
use crate::report::render_failure;

/// Create an assertion context for a subject.
///
/// This is the entry point for the fluent assertion API. The subject's
/// representation is rendered once, up front, so reports stay stable even
/// after the subject has been moved or transformed.
///
/// # Example
///
/// ```rust
/// use attest::expect;
///
/// expect("foo bar").to_contain().value("o").verify();
/// expect(10).is_less_than(11).verify();
/// ```
pub fn expect<T: fmt::Debug>(subject: T) -> Expect<T> {
    let representation = format!("{:?}", subject);
    Expect {
        subject: Some(subject),
        representation,
        assertions: Vec::new(),
    }
}

/// Create an assertion context for a dynamically typed subject.
///
/// `dyn Any` carries no `Debug` output, so the representation stays a fixed
/// placeholder until a down-cast narrows the subject to a concrete type.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use attest::expect_any;
///
/// let subject: Box<dyn Any> = Box::new(42_i32);
/// expect_any(subject).down_cast_to::<i32>().build().verify();
/// ```
pub fn expect_any(subject: Box<dyn Any>) -> Expect<Box<dyn Any>> {
    Expect {
        subject: Some(subject),
        representation: "<dynamically typed subject>".to_string(),
        assertions: Vec::new(),
    }
}

/// Assertion context holding a subject and the assertions made about it.
///
/// The subject is optional: `None` means it could not be evaluated, for
/// example after a failed subject change. Assertions applied to an absent
/// subject record themselves as unevaluable instead of being skipped, so
/// the report stays complete.
#[derive(Debug)]
pub struct Expect<T> {
    subject: Option<T>,
    representation: String,
    assertions: Vec<Assertion>,
}

impl<T> Expect<T> {
    /// Assemble a context from parts. Used by subject-change operations.
    pub(crate) fn from_parts(
        subject: Option<T>,
        representation: String,
        assertions: Vec<Assertion>,
    ) -> Self {
        Self {
            subject,
            representation,
            assertions,
        }
    }

    /// Split a context into parts. Used by subject-change operations.
    pub(crate) fn into_parts(self) -> (Option<T>, String, Vec<Assertion>) {
        (self.subject, self.representation, self.assertions)
    }

    /// The subject, if it could be evaluated.
    pub fn subject(&self) -> Option<&T> {
        self.subject.as_ref()
    }

    /// Representation of the subject used in reports.
    pub fn representation(&self) -> &str {
        &self.representation
    }

    /// All assertions accumulated so far, passing ones included.
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Whether every accumulated assertion holds.
    pub fn holds(&self) -> bool {
        self.assertions.iter().all(Assertion::holds)
    }

    /// Append an assertion to this context.
    pub fn append(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Evaluate all accumulated assertions without panicking.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionError`] carrying the subject representation and
    /// the full assertion tree when any assertion failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// let result = expect("foo bar").to_contain().value("baz").evaluate();
    /// assert!(result.is_err());
    /// ```
    pub fn evaluate(self) -> Result<(), AssertionError> {
        if self.holds() {
            Ok(())
        } else {
            Err(AssertionError::new(self.representation, self.assertions))
        }
    }

    /// Evaluate all accumulated assertions, panicking on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect("foo bar").to_contain().value("o").verify();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with the rendered failure report when any assertion failed.
    pub fn verify(self) {
        if let Err(error) = self.evaluate() {
            panic!("assertion failed: {}", error);
        }
    }
}

/// Failure returned by [`Expect::evaluate`].
///
/// Carries the full assertion tree rather than a flattened message; `Display`
/// renders the report with the default translator.
#[derive(Debug, Clone)]
pub struct AssertionError {
    subject: String,
    assertions: Vec<Assertion>,
}

impl AssertionError {
    pub(crate) fn new(subject: String, assertions: Vec<Assertion>) -> Self {
        Self {
            subject,
            assertions,
        }
    }

    /// Representation of the subject the assertions ran against.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The full assertion tree, passing nodes included.
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_failure(&self.subject, &self.assertions))
    }
}

impl std::error::Error for AssertionError {}
