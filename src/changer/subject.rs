//! Subject-change operations.

use std::fmt;

use crate::assertion::Assertion;
use crate::description::Description;
use crate::expect::Expect;

/// Derive a new context by transforming the subject, leaving no trace in the
/// report.
///
/// The derived context starts with an empty assertion list; use [`reported`]
/// when the change itself should be checked and visible. An absent subject
/// stays absent and the transformation never runs; the old representation is
/// kept so reports can still name what failed earlier.
///
/// # Example
///
/// ```rust
/// use attest::{expect, unreported};
///
/// let length = unreported(expect("hello"), |s| s.len());
/// length.to_equal(5).verify();
/// ```
pub fn unreported<T, R, F>(expect: Expect<T>, transformation: F) -> Expect<R>
where
    R: fmt::Debug,
    F: FnOnce(T) -> R,
{
    let (subject, representation, _) = expect.into_parts();
    let subject = subject.map(transformation);
    let representation = match &subject {
        Some(new_subject) => format!("{:?}", new_subject),
        None => representation,
    };
    Expect::from_parts(subject, representation, Vec::new())
}

/// Derive a new context through a checked, reported transformation.
///
/// The feasibility check runs first; only when it passes does the
/// transformation run. The change is recorded as a single descriptive
/// assertion either way:
/// - check passes: a passing assertion, and the derived context carries the
///   transformed subject.
/// - check fails: a failing assertion, and the derived context has no
///   subject. The transformation is never invoked.
/// - subject absent: an unevaluable assertion; neither closure runs.
///
/// Assertions accumulated before the change are carried into the derived
/// context, so one report covers the whole chain.
///
/// # Example
///
/// ```rust
/// use attest::{expect, reported, Description};
///
/// let parsed = reported(
///     expect("17"),
///     Description::IsA,
///     "integer",
///     |s: &&str| s.parse::<i32>().is_ok(),
///     |s| s.parse::<i32>().unwrap_or_default(),
/// );
/// parsed.to_equal(17).verify();
/// ```
pub fn reported<T, R, C, F>(
    expect: Expect<T>,
    description: Description,
    representation: impl Into<String>,
    can_be_transformed: C,
    transformation: F,
) -> Expect<R>
where
    R: fmt::Debug,
    C: FnOnce(&T) -> bool,
    F: FnOnce(T) -> R,
{
    reported_with(
        expect,
        description,
        representation,
        can_be_transformed,
        transformation,
        |context| context,
    )
}

/// Like [`reported`], additionally applying `sub_assertions` to the derived
/// context when the change succeeded.
///
/// On the failure paths `sub_assertions` never runs; the derived context
/// carries only the failing change assertion (plus whatever was accumulated
/// before it).
pub fn reported_with<T, R, C, F, S>(
    expect: Expect<T>,
    description: Description,
    representation: impl Into<String>,
    can_be_transformed: C,
    transformation: F,
    sub_assertions: S,
) -> Expect<R>
where
    R: fmt::Debug,
    C: FnOnce(&T) -> bool,
    F: FnOnce(T) -> R,
    S: FnOnce(Expect<R>) -> Expect<R>,
{
    let change_representation = representation.into();
    let (subject, subject_representation, mut assertions) = expect.into_parts();

    let subject = match subject {
        Some(subject) => subject,
        None => {
            assertions.push(Assertion::unevaluable(
                description,
                Some(change_representation),
            ));
            return Expect::from_parts(None, subject_representation, assertions);
        }
    };

    if !can_be_transformed(&subject) {
        assertions.push(Assertion::descriptive(
            description,
            Some(change_representation),
            false,
        ));
        return Expect::from_parts(None, subject_representation, assertions);
    }

    let new_subject = transformation(subject);
    let new_representation = format!("{:?}", new_subject);
    assertions.push(Assertion::descriptive(
        description,
        Some(change_representation),
        true,
    ));

    let context = Expect::from_parts(Some(new_subject), new_representation, assertions);
    sub_assertions(context)
}
