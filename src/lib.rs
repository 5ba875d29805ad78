//! # Tidepool
//!
//! > *Small, still pools of values - nothing in them is ever null.*
//!
//! A library of functional programming primitives layered over the standard
//! collections: option helpers, an unbiased [`Either`] sum type, an
//! error-accumulating [`Validation`] type, and a non-empty vector whose
//! [`Semigroup`] instance powers multi-field error reporting.
//!
//! ## Accumulating validation
//!
//! The heart of the library is applicative validation: every independent
//! check runs, and every failure is collected, instead of stopping at the
//! first problem.
//!
//! ```rust
//! use tidepool::{NonEmptyVec, Validation};
//!
//! fn check<T, E>(ok: bool, on_failure: E, on_success: T) -> Validation<T, NonEmptyVec<E>> {
//!     Validation::condition(ok, on_failure, on_success).nel()
//! }
//!
//! let name = " ";
//! let age = -5;
//!
//! let result = Validation::all((
//!     check(!name.trim().is_empty(), "name is blank", name),
//!     check(age >= 0, "age is negative", age),
//! ))
//! .map(|(name, age)| (name.to_string(), age));
//!
//! let errors = result.unwrap_failure();
//! assert_eq!(errors.into_vec(), vec!["name is blank", "age is negative"]);
//! ```
//!
//! ## Design
//!
//! Everything here is a pure, synchronous value transformation. The only
//! side-effect points are the explicitly named hooks
//! ([`OptionExt::tap_some`], [`Validation::tap_failure`]), which run on the
//! caller's thread and return the value unchanged. Domain failures live in
//! the `Failure` channel and are never thrown; extracting the wrong variant
//! of a [`Validation`] or building a [`NonEmptyVec`] from an empty vector is
//! a programmer error and panics immediately.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod maybe;
pub mod monoid;
pub mod nonempty;
pub mod pretty;
pub mod semigroup;
pub mod strategy;
pub mod strings;
pub mod traverse;
pub mod validation;

// Re-exports
pub use either::Either;
pub use maybe::OptionExt;
pub use monoid::Monoid;
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use strategy::{Equal, Order, Show};
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::maybe::OptionExt;
    pub use crate::monoid::Monoid;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::semigroup::Semigroup;
    pub use crate::strategy::{Equal, Order, Show};
    pub use crate::validation::{ValidateAll, Validation};
}
