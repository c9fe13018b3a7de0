//! Staged builder for reported subject changes.
//!
//! Each stage is its own type exposing only the next legal call, so a chain
//! that compiles is a chain that is fully specified: description, then
//! feasibility check, then transformation, then build. Stages are plain
//! values; dropping one halfway simply discards the chain.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use crate::description::Description;
use crate::expect::Expect;

use super::subject::{reported, reported_with};

/// Start a reported subject change for `expect`.
///
/// # Example
///
/// ```rust
/// use attest::{expect, report_builder, Description};
///
/// let parsed = report_builder(expect("17"))
///     .with_description(Description::IsA, "integer")
///     .with_check(|s: &&str| s.parse::<i32>().is_ok())
///     .with_transformation(|s| s.parse::<i32>().unwrap_or_default())
///     .build();
/// parsed.is_greater_than(10).verify();
/// ```
pub fn report_builder<T>(expect: Expect<T>) -> DescriptionStep<T> {
    DescriptionStep { expect }
}

/// First stage: supply the description and representation of the change.
#[derive(Debug)]
pub struct DescriptionStep<T> {
    expect: Expect<T>,
}

impl<T> DescriptionStep<T> {
    /// Describe the change for reporting.
    pub fn with_description(
        self,
        description: Description,
        representation: impl Into<String>,
    ) -> CheckStep<T> {
        CheckStep {
            expect: self.expect,
            description,
            representation: representation.into(),
        }
    }
}

/// Second stage: supply the feasibility check.
#[derive(Debug)]
pub struct CheckStep<T> {
    expect: Expect<T>,
    description: Description,
    representation: String,
}

impl<T> CheckStep<T> {
    /// Supply the predicate deciding whether the transformation can run.
    pub fn with_check<C>(self, can_be_transformed: C) -> TransformationStep<T, C>
    where
        C: FnOnce(&T) -> bool,
    {
        TransformationStep {
            expect: self.expect,
            description: self.description,
            representation: self.representation,
            can_be_transformed,
        }
    }
}

/// Third stage: supply the transformation itself.
pub struct TransformationStep<T, C> {
    expect: Expect<T>,
    description: Description,
    representation: String,
    can_be_transformed: C,
}

impl<T, C> TransformationStep<T, C>
where
    C: FnOnce(&T) -> bool,
{
    /// Supply the transformation applied when the check passes.
    pub fn with_transformation<R, F>(self, transformation: F) -> FinalStep<T, R, C, F>
    where
        R: fmt::Debug,
        F: FnOnce(T) -> R,
    {
        FinalStep {
            expect: self.expect,
            description: self.description,
            representation: self.representation,
            can_be_transformed: self.can_be_transformed,
            transformation,
            _result: PhantomData,
        }
    }
}

/// Final stage: run the change.
pub struct FinalStep<T, R, C, F> {
    expect: Expect<T>,
    description: Description,
    representation: String,
    can_be_transformed: C,
    transformation: F,
    _result: PhantomData<R>,
}

impl<T, R, C, F> FinalStep<T, R, C, F>
where
    R: fmt::Debug,
    C: FnOnce(&T) -> bool,
    F: FnOnce(T) -> R,
{
    /// Run the change and return the derived context.
    pub fn build(self) -> Expect<R> {
        reported(
            self.expect,
            self.description,
            self.representation,
            self.can_be_transformed,
            self.transformation,
        )
    }

    /// Run the change, then apply `sub_assertions` to the derived context
    /// when the change succeeded.
    pub fn build_with<S>(self, sub_assertions: S) -> Expect<R>
    where
        S: FnOnce(Expect<R>) -> Expect<R>,
    {
        reported_with(
            self.expect,
            self.description,
            self.representation,
            self.can_be_transformed,
            self.transformation,
            sub_assertions,
        )
    }
}

/// A fully specified down-cast chain for a dynamically typed subject.
pub type DownCastStep<R> =
    FinalStep<Box<dyn Any>, R, fn(&Box<dyn Any>) -> bool, fn(Box<dyn Any>) -> R>;

impl DescriptionStep<Box<dyn Any>> {
    /// Narrow a dynamically typed subject to `R`.
    ///
    /// The feasibility check is the runtime type test and the transformation
    /// is the checked down-cast, so the transformation can never run against
    /// a subject of the wrong type. The change is described as `is a` with
    /// the target type name as representation.
    pub fn down_cast_to<R: Any + fmt::Debug>(self) -> DownCastStep<R> {
        self.with_description(Description::IsA, type_name::<R>())
            .with_check(is_type::<R> as fn(&Box<dyn Any>) -> bool)
            .with_transformation(down_cast::<R> as fn(Box<dyn Any>) -> R)
    }
}

impl Expect<Box<dyn Any>> {
    /// Assert the subject is an `R` and continue with the narrowed value.
    ///
    /// Shorthand for `report_builder(..).down_cast_to::<R>()`. Returns the
    /// final builder stage so sub-assertions can still be attached with
    /// [`FinalStep::build_with`]; call [`FinalStep::build`] for the narrowed
    /// context alone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::any::Any;
    /// use attest::expect_any;
    ///
    /// let subject: Box<dyn Any> = Box::new(7_i32);
    /// expect_any(subject)
    ///     .down_cast_to::<i32>()
    ///     .build_with(|ctx| ctx.is_greater_than(5))
    ///     .verify();
    /// ```
    pub fn down_cast_to<R: Any + fmt::Debug>(self) -> DownCastStep<R> {
        report_builder(self).down_cast_to::<R>()
    }
}

fn is_type<R: Any>(subject: &Box<dyn Any>) -> bool {
    (**subject).is::<R>()
}

fn down_cast<R: Any>(subject: Box<dyn Any>) -> R {
    match subject.downcast::<R>() {
        Ok(narrowed) => *narrowed,
        // The builder runs this only after is_type passed.
        Err(_) => unreachable!("down-cast after a passing type check"),
    }
}
