//! Validation type that accumulates errors instead of short-circuiting
//!
//! `Validation<T, E>` has the same shape as `Result`, but its combinators are
//! applicative rather than monadic: when several independent validations are
//! combined, every one of them is evaluated and every failure payload is
//! merged with [`Semigroup::combine`], in declaration order. That is what
//! turns "first error only" reporting into full multi-field error reporting.
//!
//! # Accumulating independent checks
//!
//! ```
//! use tidepool::{NonEmptyVec, Validation};
//!
//! let v1 = Validation::<i32, _>::failure(NonEmptyVec::singleton("too small"));
//! let v2 = Validation::<i32, _>::failure(NonEmptyVec::singleton("not even"));
//! let combined = v1.and(v2);
//!
//! assert_eq!(
//!     combined.unwrap_failure().into_vec(),
//!     vec!["too small", "not even"],
//! );
//! ```
//!
//! # Building a record from field validations
//!
//! ```
//! use tidepool::{NonEmptyVec, Validation};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person { name: String, age: i32 }
//!
//! let validated = Validation::all((
//!     Validation::<_, NonEmptyVec<&str>>::success("Luke Skywalker".to_string()),
//!     Validation::<_, NonEmptyVec<&str>>::success(32),
//! ))
//! .map(|(name, age)| Person { name, age });
//!
//! assert_eq!(
//!     validated,
//!     Validation::Success(Person { name: "Luke Skywalker".to_string(), age: 32 }),
//! );
//! ```
//!
//! Contrast with [`and_then`](Validation::and_then), which chains *dependent*
//! computations and stops at the first failure, exactly like
//! `Result::and_then`.

use crate::{Either, NonEmptyVec, Semigroup};

/// A validation that either succeeds with a value or fails with accumulated
/// errors.
///
/// # Type Parameters
///
/// * `T` - The success value
/// * `E` - The error payload; must implement [`Semigroup`] for accumulation
///
/// # Two error disciplines
///
/// Domain failures are values in the `Failure` channel: expected,
/// data-dependent, and fully recoverable. Reading the wrong variant through
/// [`unwrap_success`](Validation::unwrap_success) or
/// [`unwrap_failure`](Validation::unwrap_failure) is a programmer error and
/// panics; those methods document the precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// Successful validation holding a value
    Success(T),
    /// Failed validation holding accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation.
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// `Success(on_success)` when the condition holds, otherwise
    /// `Failure(on_failure)`.
    ///
    /// Both payloads are evaluated eagerly; this is a pure selection, not a
    /// lazy computation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let age = -5;
    /// let v = Validation::condition(age >= 0, "Age cannot be negative", age);
    /// assert_eq!(v, Validation::Failure("Age cannot be negative"));
    /// ```
    #[inline]
    pub fn condition(is_valid: bool, on_failure: E, on_success: T) -> Self {
        if is_valid {
            Validation::Success(on_success)
        } else {
            Validation::Failure(on_failure)
        }
    }

    /// Create a validation from a `Result`.
    ///
    /// This is the boundary adapter for host-runtime parsing: catch the
    /// parse error exactly once, here, and it never propagates further.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let parsed = Validation::from_result("42".parse::<i32>())
    ///     .map_err(|e| e.to_string());
    /// assert_eq!(parsed, Validation::Success(42));
    ///
    /// let failed = Validation::from_result("not a number".parse::<i32>())
    ///     .map_err(|e| e.to_string());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Create a validation from an [`Either`], reading `Left` as failure and
    /// `Right` as success.
    #[inline]
    pub fn from_either(either: Either<E, T>) -> Self {
        match either {
            Either::Left(error) => Validation::Failure(error),
            Either::Right(value) => Validation::Success(value),
        }
    }

    /// Convert this validation to a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Convert this validation to an [`Either`] with the failure on the left.
    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Validation::Success(value) => Either::Right(value),
            Validation::Failure(error) => Either::Left(error),
        }
    }

    /// Keep the success value, discarding any failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// assert_eq!(Validation::<_, &str>::success(1).into_option(), Some(1));
    /// assert_eq!(Validation::<i32, _>::failure("gone").into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// Check if this validation is successful.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let v = Validation::<_, &str>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error payload if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["e1", "e2"]);
    /// assert_eq!(v.map_err(|es| es.len()), Validation::Failure(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Eliminate the validation by handling both variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let v = Validation::<i32, Vec<&str>>::failure(vec!["e1", "e2"]);
    /// let msg = v.fold(
    ///     |errors| format!("{} problems", errors.len()),
    ///     |n| format!("got {}", n),
    /// );
    /// assert_eq!(msg, "2 problems");
    /// ```
    #[inline]
    pub fn fold<R, FF, FS>(self, on_failure: FF, on_success: FS) -> R
    where
        FF: FnOnce(E) -> R,
        FS: FnOnce(T) -> R,
    {
        match self {
            Validation::Success(value) => on_success(value),
            Validation::Failure(error) => on_failure(error),
        }
    }

    /// Elevate the error payload into a single-element [`NonEmptyVec`],
    /// making this validation ready for accumulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::{NonEmptyVec, Validation};
    ///
    /// let v = Validation::condition(false, "bad input", 0).nel();
    /// assert_eq!(v, Validation::Failure(NonEmptyVec::singleton("bad input")));
    /// ```
    #[inline]
    pub fn nel(self) -> Validation<T, NonEmptyVec<E>> {
        self.map_err(NonEmptyVec::singleton)
    }

    /// Run a side-effecting closure on the success value, returning the
    /// validation unchanged.
    pub fn tap_success<F: FnOnce(&T)>(self, effect: F) -> Self {
        if let Validation::Success(value) = &self {
            effect(value);
        }
        self
    }

    /// Run a side-effecting closure on the error payload, returning the
    /// validation unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let mut seen = Vec::new();
    /// let v = Validation::<i32, _>::failure("boom")
    ///     .tap_failure(|e| seen.push(*e));
    /// assert_eq!(seen, vec!["boom"]);
    /// assert!(v.is_failure());
    /// ```
    pub fn tap_failure<F: FnOnce(&E)>(self, effect: F) -> Self {
        if let Validation::Failure(error) = &self {
            effect(error);
        }
        self
    }

    /// Extract the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. Calling this on a failed validation is
    /// a precondition violation in the calling code; use
    /// [`fold`](Validation::fold) or [`into_result`](Validation::into_result)
    /// when the variant is not known.
    #[track_caller]
    pub fn unwrap_success(self) -> T {
        match self {
            Validation::Success(value) => value,
            Validation::Failure(_) => {
                panic!("Validation::unwrap_success called on a Failure")
            }
        }
    }

    /// Extract the error payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`. Calling this on a successful
    /// validation is a precondition violation in the calling code.
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Validation::Failure(error) => error,
            Validation::Success(_) => {
                panic!("Validation::unwrap_failure called on a Success")
            }
        }
    }

    /// Extract the success value with a caller-supplied panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if this is a `Failure`.
    #[track_caller]
    pub fn expect_success(self, msg: &str) -> T {
        match self {
            Validation::Success(value) => value,
            Validation::Failure(_) => panic!("{}", msg),
        }
    }
}

#[cfg(feature = "tracing")]
impl<T, E: std::fmt::Debug> Validation<T, E> {
    /// Emit a `tracing` debug event for a failure, returning the validation
    /// unchanged. Success passes through silently.
    pub fn traced(self, label: &str) -> Self {
        if let Validation::Failure(errors) = &self {
            tracing::debug!(label, errors = ?errors, "validation failed");
        }
        self
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two independent validations, accumulating errors.
    ///
    /// Both sides are already-evaluated values, so a failure on the left
    /// never prevents the right from having been checked. Two failures merge
    /// with [`Semigroup::combine`], left before right.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let v1 = Validation::<_, Vec<&str>>::success(1);
    /// let v2 = Validation::<_, Vec<&str>>::success(2);
    /// assert_eq!(v1.and(v2), Validation::Success((1, 2)));
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["e1"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["e2"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["e1", "e2"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation.
    ///
    /// Monadic, not applicative: the closure runs only on success, so a
    /// failure here short-circuits. Use [`and`](Validation::and) or
    /// [`Validation::all`] when the checks are independent and all errors
    /// should be reported.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine a homogeneous sequence of validations.
    ///
    /// All successes yield `Success` of every value in order; otherwise every
    /// failure payload is merged in encounter order and the successes are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let all_good = Validation::all_vec(vec![
    ///     Validation::<_, Vec<&str>>::success(1),
    ///     Validation::success(2),
    /// ]);
    /// assert_eq!(all_good, Validation::Success(vec![1, 2]));
    ///
    /// let mixed = Validation::all_vec(vec![
    ///     Validation::<i32, _>::failure(vec!["e1"]),
    ///     Validation::success(7),
    ///     Validation::failure(vec!["e2"]),
    /// ]);
    /// assert_eq!(mixed, Validation::Failure(vec!["e1", "e2"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::with_capacity(validations.len());
        let mut errors: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => errors = errors.combine(Some(error)),
            }
        }

        match errors {
            None => Validation::Success(successes),
            Some(errors) => Validation::Failure(errors),
        }
    }

    /// Combine a tuple of independent validations, accumulating errors.
    ///
    /// Works for tuples of arity 1 through 8. Evaluation order is the tuple
    /// declaration order, and failures concatenate in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let result = Validation::all((
    ///     Validation::<_, Vec<&str>>::success(1),
    ///     Validation::<_, Vec<&str>>::success("two"),
    ///     Validation::<_, Vec<&str>>::success(3.0),
    /// ));
    /// assert_eq!(result, Validation::Success((1, "two", 3.0)));
    /// ```
    pub fn all<V>(validations: V) -> Self
    where
        V: ValidateAll<E, Output = T>,
    {
        validations.validate_all()
    }
}

/// Trait for combining a tuple of heterogeneous validations.
///
/// Implemented for tuples of [`Validation`] values up to arity 8, all
/// sharing the same [`Semigroup`] error type. This is the fixed-arity
/// rendering of a variadic "accumulate N validations" combinator.
pub trait ValidateAll<E: Semigroup> {
    /// The combined success type when every validation succeeds
    type Output;

    /// Combine all validations, accumulating every failure in declaration
    /// order.
    fn validate_all(self) -> Validation<Self::Output, E>;
}

macro_rules! impl_validate_all {
    ($($T:ident),+) => {
        impl<E: Semigroup, $($T),+> ValidateAll<E> for ($(Validation<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validation<Self::Output, E> {
                let ($($T,)+) = self;
                let mut errors: Option<E> = None;
                $(
                    let $T = match $T {
                        Validation::Success(value) => Some(value),
                        Validation::Failure(error) => {
                            errors = errors.combine(Some(error));
                            None
                        }
                    };
                )+
                match errors {
                    Some(errors) => Validation::Failure(errors),
                    // No failure recorded, so every slot holds its value.
                    None => Validation::Success((
                        $($T.expect("no failure recorded"),)+
                    )),
                }
            }
        }
    };
}

impl_validate_all!(T1);
impl_validate_all!(T1, T2);
impl_validate_all!(T1, T2, T3);
impl_validate_all!(T1, T2, T3, T4);
impl_validate_all!(T1, T2, T3, T4, T5);
impl_validate_all!(T1, T2, T3, T4, T5, T6);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7, T8);
