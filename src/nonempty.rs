//! Non-empty vector, the failure channel of accumulating validation
//!
//! `NonEmptyVec<T>` is an ordered sequence guaranteed by construction to hold
//! at least one element. It exists primarily as the error payload of
//! [`Validation`](crate::Validation): a failed validation always carries at
//! least one error, and the type system records that fact so no caller ever
//! has to handle an "failed with zero errors" state.
//!
//! # Examples
//!
//! ```
//! use tidepool::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("first", vec!["second", "third"]);
//! assert_eq!(errors.head(), &"first");
//! assert_eq!(errors.len(), 3);
//! ```
//!
//! Combination concatenates, preserving encounter order:
//!
//! ```
//! use tidepool::{NonEmptyVec, Semigroup};
//!
//! let a = NonEmptyVec::singleton("E1");
//! let b = NonEmptyVec::singleton("E2");
//! assert_eq!(a.combine(b).into_vec(), vec!["E1", "E2"]);
//! ```

use crate::Semigroup;

/// An ordered sequence containing at least one element.
///
/// The head is stored separately from the tail, so emptiness is
/// unrepresentable and `head()`, `last()`, and `len() >= 1` hold without any
/// runtime check.
///
/// # Example
///
/// ```
/// use tidepool::NonEmptyVec;
///
/// let nev = NonEmptyVec::new(1, vec![2, 3, 4]);
/// assert_eq!(nev.head(), &1);
/// assert_eq!(nev.tail(), &[2, 3, 4]);
/// assert_eq!(nev.last(), &4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and any number of
    /// trailing elements.
    ///
    /// # Example
    ///
    /// ```
    /// use tidepool::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.len(), 3);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use tidepool::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("only error");
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` when the input is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use tidepool::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// Create a non-empty vector from a `Vec`, asserting it is non-empty.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Passing an empty vector is a
    /// precondition violation in the calling code, not a recoverable
    /// condition; use [`from_vec`](Self::from_vec) when emptiness is a
    /// legitimate possibility.
    ///
    /// # Example
    ///
    /// ```
    /// use tidepool::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::from_vec_unchecked(vec![1, 2, 3]);
    /// assert_eq!(nev.len(), 3);
    /// ```
    ///
    /// ```should_panic
    /// use tidepool::NonEmptyVec;
    ///
    /// NonEmptyVec::from_vec_unchecked(Vec::<i32>::new()); // panics
    /// ```
    pub fn from_vec_unchecked(vec: Vec<T>) -> Self {
        Self::from_vec(vec).expect("NonEmptyVec::from_vec_unchecked called on empty Vec")
    }

    /// The first element. Always present.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// All elements after the first. May be empty.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element. Always present.
    ///
    /// # Example
    ///
    /// ```
    /// use tidepool::NonEmptyVec;
    ///
    /// assert_eq!(NonEmptyVec::new(1, vec![2, 3]).last(), &3);
    /// assert_eq!(NonEmptyVec::singleton(9).last(), &9);
    /// ```
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// The number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to mirror the standard collection API.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Transform every element, preserving order and length.
    ///
    /// # Example
    ///
    /// ```
    /// use tidepool::NonEmptyVec;
    ///
    /// let codes = NonEmptyVec::new(1, vec![2, 3]);
    /// let labels = codes.map(|n| format!("E{}", n));
    /// assert_eq!(labels.into_vec(), vec!["E1", "E2", "E3"]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Convert to a regular `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = vec![self.head];
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements, head first.
    ///
    /// # Example
    ///
    /// ```
    /// use tidepool::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// let sum: i32 = nev.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

// Semigroup: order-preserving concatenation. Associative; no identity can
// exist because the empty sequence is unrepresentable.
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> From<T> for NonEmptyVec<T> {
    fn from(value: T) -> Self {
        NonEmptyVec::singleton(value)
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

// Serialized as a plain sequence; deserialization re-checks non-emptiness so
// the construction invariant survives a round-trip through untrusted data.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let vec = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(vec)
            .ok_or_else(|| serde::de::Error::custom("NonEmptyVec requires at least one element"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton(42);
        assert_eq!(nev.head(), &42);
        assert_eq!(nev.tail(), &[] as &[i32]);
        assert_eq!(nev.len(), 1);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_new_with_tail() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(nev.head(), &1);
        assert_eq!(nev.tail(), &[2, 3]);
        assert_eq!(nev.last(), &3);
        assert_eq!(nev.len(), 3);
    }

    #[test]
    fn test_from_vec() {
        let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(nev.head(), &1);
        assert_eq!(nev.tail(), &[2, 3]);

        assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    }

    #[test]
    #[should_panic(expected = "NonEmptyVec::from_vec_unchecked called on empty Vec")]
    fn test_from_vec_unchecked_panics_on_empty() {
        NonEmptyVec::from_vec_unchecked(Vec::<i32>::new());
    }

    #[test]
    fn test_map_preserves_order_and_length() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        let doubled = nev.map(|x| x * 2);
        assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_combine_concatenates_in_order() {
        let a = NonEmptyVec::new("E1", vec!["E2"]);
        let b = NonEmptyVec::new("E3", vec!["E4"]);
        assert_eq!(a.combine(b).into_vec(), vec!["E1", "E2", "E3", "E4"]);
    }

    #[test]
    fn test_combine_associativity() {
        let a = NonEmptyVec::singleton(1);
        let b = NonEmptyVec::new(2, vec![3]);
        let c = NonEmptyVec::singleton(4);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_combine_length_is_additive() {
        let a = NonEmptyVec::new(1, vec![2]);
        let b = NonEmptyVec::new(3, vec![4, 5]);
        let (la, lb) = (a.len(), b.len());
        assert_eq!(a.combine(b).len(), la + lb);
    }

    #[test]
    fn test_iter_and_into_iter() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        let borrowed: Vec<_> = nev.iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3]);

        let owned: Vec<_> = nev.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_single_value() {
        let nev: NonEmptyVec<&str> = "boom".into();
        assert_eq!(nev.head(), &"boom");
        assert_eq!(nev.len(), 1);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serialize_as_plain_sequence() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(serde_json::to_string(&nev).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_deserialize_rejects_empty_sequence() {
        let ok: NonEmptyVec<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(ok.into_vec(), vec![1, 2, 3]);

        let err = serde_json::from_str::<NonEmptyVec<i32>>("[]");
        assert!(err.is_err());
    }
}
