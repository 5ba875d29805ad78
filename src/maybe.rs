//! Option helpers for null-free programming
//!
//! Rust's `Option<T>` already is the sum type this library builds on: `None`
//! is first-class absence, `Some` always holds a materialized value, and
//! `map` / `filter` / `and_then` (bind) / `unwrap_or` (or-else) /
//! `unwrap_or_else` are total standard-library operations. Constructing from
//! a raw nullable value happens at the FFI or parsing boundary, where the
//! host API already hands back an `Option`.
//!
//! This module adds the few operations std leaves out: a sanctioned
//! side-effect hook ([`OptionExt::tap_some`]), a lift into the validation
//! channel ([`OptionExt::into_validation`]), and strategy-driven equality
//! over two options ([`both_equal_by`]).
//!
//! # Examples
//!
//! ```
//! use tidepool::OptionExt;
//!
//! let mut seen = Vec::new();
//! let name = Some("Batman");
//!
//! name.filter(|n| !n.trim().is_empty())
//!     .map(str::to_lowercase)
//!     .tap_some(|n| seen.push(n.clone()));
//!
//! assert_eq!(seen, vec!["batman"]);
//! ```

use crate::{Equal, Validation};

/// Extension operations for `Option<T>`.
pub trait OptionExt<T> {
    /// Run a side-effecting closure on the contained value, if any,
    /// returning the option unchanged. A no-op on `None`.
    ///
    /// This is the only sanctioned side-effect point on options; everything
    /// else in this module is a pure value transformation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::OptionExt;
    ///
    /// let mut log = Vec::new();
    /// Some("Random Ave").tap_some(|addr| log.push(*addr));
    /// None::<&str>.tap_some(|addr| log.push(*addr));
    /// assert_eq!(log, vec!["Random Ave"]);
    /// ```
    fn tap_some<F: FnOnce(&T)>(self, effect: F) -> Self;

    /// Lift the option into the validation channel: `Some` becomes
    /// `Success`, `None` becomes `Failure(on_none())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::{OptionExt, Validation};
    ///
    /// let present = Some(7).into_validation(|| vec!["missing"]);
    /// assert_eq!(present, Validation::Success(7));
    ///
    /// let absent = None::<i32>.into_validation(|| vec!["missing"]);
    /// assert_eq!(absent, Validation::Failure(vec!["missing"]));
    /// ```
    fn into_validation<E, F: FnOnce() -> E>(self, on_none: F) -> Validation<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn tap_some<F: FnOnce(&T)>(self, effect: F) -> Self {
        if let Some(value) = &self {
            effect(value);
        }
        self
    }

    fn into_validation<E, F: FnOnce() -> E>(self, on_none: F) -> Validation<T, E> {
        match self {
            Some(value) => Validation::Success(value),
            None => Validation::Failure(on_none()),
        }
    }
}

/// True only when both options are present and their contents are equal
/// under the supplied strategy.
///
/// An absent side never compares equal to anything, including another
/// absent side - "both unknown" is not "equal".
///
/// # Examples
///
/// ```
/// use tidepool::{maybe::both_equal_by, Equal};
///
/// let eq = Equal::<i32>::derived();
/// assert!(both_equal_by(&eq, &Some(1), &Some(1)));
/// assert!(!both_equal_by(&eq, &Some(1), &None));
/// assert!(!both_equal_by(&eq, &None, &None));
/// ```
pub fn both_equal_by<T>(eq: &Equal<T>, a: &Option<T>, b: &Option<T>) -> bool {
    a.as_ref()
        .and_then(|x| b.as_ref().map(|y| eq.eq(x, y)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_some_runs_only_when_present() {
        let mut log = Vec::new();
        let some = Some(5).tap_some(|n| log.push(*n));
        let none = None::<i32>.tap_some(|n| log.push(*n));
        assert_eq!(some, Some(5));
        assert_eq!(none, None);
        assert_eq!(log, vec![5]);
    }

    #[test]
    fn test_into_validation() {
        assert_eq!(
            Some(1).into_validation(|| "missing"),
            Validation::Success(1)
        );
        assert_eq!(
            None::<i32>.into_validation(|| "missing"),
            Validation::Failure("missing")
        );
    }

    #[test]
    fn test_both_equal_by_requires_presence() {
        let eq = Equal::<String>::from_fn(|a, b| a.eq_ignore_ascii_case(b));
        let a = Some("BaTmAn".to_string());
        let b = Some("batman".to_string());
        assert!(both_equal_by(&eq, &a, &b));
        assert!(!both_equal_by(&eq, &a, &None));
        assert!(!both_equal_by(&eq, &None, &b));
        assert!(!both_equal_by::<String>(&eq, &None, &None));
    }

    // Functor and monad identity laws, stated over std Option since that is
    // the optional type this library builds on.
    #[test]
    fn test_option_identity_laws() {
        let o = Some(3);
        assert_eq!(o.map(|x| x), o);
        assert_eq!(o.and_then(Some), o);

        let n: Option<i32> = None;
        assert_eq!(n.map(|x| x), n);
        assert_eq!(n.and_then(Some), n);
    }
}
