//! Monoid trait for semigroups with an identity element
//!
//! A `Monoid` extends [`Semigroup`] with an identity value, which makes it
//! possible to fold an arbitrary (possibly empty) collection without a seed.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right identity**: `a.combine(M::empty()) == a`
//! 3. **Left identity**: `M::empty().combine(a) == a`
//!
//! [`NonEmptyVec`](crate::NonEmptyVec) has no `Monoid` instance: a non-empty
//! collection admits no empty identity.
//!
//! # Examples
//!
//! ```
//! use tidepool::{Monoid, Semigroup};
//! use tidepool::monoid::fold_all;
//!
//! let v1 = vec![1, 2, 3];
//! let empty: Vec<i32> = Monoid::empty();
//! assert_eq!(v1.clone().combine(empty.clone()), v1);
//! assert_eq!(empty.combine(v1.clone()), v1);
//!
//! let joined = fold_all(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
//! assert_eq!(joined, "abc");
//! ```

use crate::Semigroup;

/// A `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

// None is the identity; the inner Semigroup handles Some-Some combination
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Fold an iterator of monoid values into one, starting from the identity.
///
/// # Examples
///
/// ```
/// use tidepool::monoid::fold_all;
///
/// let total = fold_all(vec![vec![1], vec![2, 3], vec![]]);
/// assert_eq!(total, vec![1, 2, 3]);
///
/// let nothing: Vec<i32> = fold_all(Vec::<Vec<i32>>::new());
/// assert_eq!(nothing, Vec::<i32>::new());
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), Semigroup::combine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_identity() {
        let v = vec![1, 2, 3];
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(v.clone().combine(empty.clone()), v);
        assert_eq!(empty.combine(v.clone()), v);
    }

    #[test]
    fn test_string_identity() {
        let s = "tide".to_string();
        let empty: String = Monoid::empty();
        assert_eq!(s.clone().combine(empty.clone()), s);
        assert_eq!(empty.combine(s.clone()), s);
    }

    #[test]
    fn test_option_identity() {
        let some = Some(vec![1]);
        let empty: Option<Vec<i32>> = Monoid::empty();
        assert_eq!(some.clone().combine(empty.clone()), some);
        assert_eq!(empty.combine(some.clone()), some);
    }

    #[test]
    fn test_fold_all_strings() {
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(fold_all(parts), "abc");
    }

    #[test]
    fn test_fold_all_empty_iterator() {
        let folded: String = fold_all(Vec::<String>::new());
        assert_eq!(folded, "");
    }
}
