//! Failure report rendering.
//!
//! A report is the assertion tree written out line by line: a header naming
//! the subject, then one line per node with a pass/fail marker, indented by
//! depth. Passing nodes are rendered too, so a report always shows the whole
//! check, not just the broken branch.

use crate::assertion::Assertion;
use crate::description::Description;

/// Resolves description keys to human-readable text.
///
/// The default implementation uses the built-in English wording; supply your
/// own to re-word or localize reports without touching assertion logic.
pub trait Translator {
    /// Resolve a description key to text.
    fn translate(&self, description: Description) -> String;
}

/// Translator using [`Description::default_translation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn translate(&self, description: Description) -> String {
        description.default_translation().to_string()
    }
}

/// Render a report for a subject and its assertion tree.
///
/// # Example
///
/// ```rust
/// use attest::{expect, render_failure};
///
/// let error = expect("foo").to_contain().value("x").evaluate().unwrap_err();
/// let report = render_failure(error.subject(), error.assertions());
/// assert!(report.starts_with("expected that subject: \"foo\""));
/// ```
pub fn render_failure(subject: &str, assertions: &[Assertion]) -> String {
    render_failure_with(subject, assertions, &DefaultTranslator)
}

/// Render a report with a custom translator.
pub fn render_failure_with(
    subject: &str,
    assertions: &[Assertion],
    translator: &dyn Translator,
) -> String {
    let mut out = format!("expected that subject: {}\n", subject);
    for assertion in assertions {
        render_node(&mut out, assertion, 1, translator);
    }
    out
}

fn render_node(out: &mut String, assertion: &Assertion, depth: usize, translator: &dyn Translator) {
    let marker = if assertion.holds() { "✓" } else { "✗" };
    let label = translator.translate(assertion.description());
    out.push_str(&"  ".repeat(depth));
    out.push_str(marker);
    out.push(' ');
    out.push_str(&label);
    if let Some(representation) = assertion.representation() {
        out.push_str(": ");
        out.push_str(representation);
    }
    out.push('\n');

    for child in assertion.children() {
        render_node(out, child, depth + 1, translator);
    }
}
