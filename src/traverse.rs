//! Sequence and traverse over collections of validations
//!
//! The generic-fold form of accumulation: turn a collection of validations
//! into a single validation of a collection, merging every failure along the
//! way.
//!
//! - [`sequence`]: `Vec<Validation<T, E>>` becomes `Validation<Vec<T>, E>`
//! - [`traverse`]: map a validating function over a collection and sequence
//!   the results in one pass
//!
//! # Examples
//!
//! ```
//! use tidepool::{traverse::traverse, Validation};
//!
//! fn parse_number(s: &str) -> Validation<i32, Vec<String>> {
//!     Validation::from_result(s.parse().map_err(|_| vec![format!("not a number: {}", s)]))
//! }
//!
//! let result = traverse(vec!["1", "2", "3"], parse_number);
//! assert_eq!(result, Validation::Success(vec![1, 2, 3]));
//!
//! let result = traverse(vec!["1", "x", "y"], parse_number);
//! assert_eq!(
//!     result,
//!     Validation::Failure(vec!["not a number: x".to_string(), "not a number: y".to_string()]),
//! );
//! ```

use crate::{Semigroup, Validation};

/// Convert a collection of validations into a validation of a collection.
///
/// Successes keep their original order; failures accumulate in encounter
/// order via [`Semigroup::combine`].
///
/// # Examples
///
/// ```
/// use tidepool::{traverse::sequence, Validation};
///
/// let vals = vec![
///     Validation::<_, Vec<&str>>::success(1),
///     Validation::success(2),
/// ];
/// assert_eq!(sequence(vals), Validation::Success(vec![1, 2]));
/// ```
pub fn sequence<T, E, I>(iter: I) -> Validation<Vec<T>, E>
where
    I: IntoIterator<Item = Validation<T, E>>,
    E: Semigroup,
{
    Validation::all_vec(iter.into_iter().collect())
}

/// Map a validating function over a collection and sequence the results.
///
/// Every element is validated regardless of earlier failures; this is the
/// applicative traversal, not a short-circuiting loop.
pub fn traverse<T, U, E, F, I>(iter: I, f: F) -> Validation<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: Fn(T) -> Validation<U, E>,
    E: Semigroup,
{
    sequence(iter.into_iter().map(f))
}
