//! Pluggable comparison and rendering strategies
//!
//! [`Equal`], [`Order`], and [`Show`] are first-class function values passed
//! explicitly at call sites, never methods baked into the element type. That
//! makes ad-hoc comparison possible - case-insensitive string equality, an
//! ordering over a projection - without newtypes or trait impls on foreign
//! types.
//!
//! Each strategy is stateless and side-effect-free; construct one where you
//! need it and let it go out of scope.
//!
//! # Examples
//!
//! ```
//! use tidepool::{Equal, Order, Show};
//!
//! let ignore_case = Equal::<String>::from_fn(|a, b| a.eq_ignore_ascii_case(b));
//! assert!(ignore_case.eq(&"BaTmAn".to_string(), &"batman".to_string()));
//!
//! let by_length = Order::<String>::from_fn(|a, b| a.len().cmp(&b.len()));
//! assert_eq!(by_length.max("hi".to_string(), "hello".to_string()), "hello");
//!
//! let quoted = Show::<String>::from_fn(|s| format!("{:?}", s));
//! assert_eq!(quoted.show(&"x".to_string()), "\"x\"");
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An equality strategy: a pure predicate deciding when two values of `A`
/// count as equal.
///
/// # Laws
///
/// The predicate must be an equivalence relation on its intended domain:
/// reflexive, symmetric, and transitive. A relaxed relation (for example,
/// case-insensitive string equality) is fine as long as those three
/// properties still hold.
pub struct Equal<A: ?Sized> {
    eq: Box<dyn Fn(&A, &A) -> bool>,
}

impl<A: ?Sized> fmt::Debug for Equal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Equal(..)")
    }
}

impl<A: ?Sized> Equal<A> {
    /// Build an equality strategy from a predicate.
    pub fn from_fn<F>(eq: F) -> Self
    where
        F: Fn(&A, &A) -> bool + 'static,
    {
        Equal { eq: Box::new(eq) }
    }

    /// Test two values for equality under this strategy.
    pub fn eq(&self, a: &A, b: &A) -> bool {
        (self.eq)(a, b)
    }
}

impl<A: PartialEq + 'static> Equal<A> {
    /// The strategy induced by the type's own `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Equal;
    ///
    /// let eq = Equal::<i32>::derived();
    /// assert!(eq.eq(&1, &1));
    /// assert!(!eq.eq(&1, &2));
    /// ```
    pub fn derived() -> Self {
        Equal::from_fn(|a: &A, b: &A| a == b)
    }
}

impl<A: 'static> Equal<A> {
    /// Adapt this strategy to another type via a projection.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Equal;
    ///
    /// struct User { id: u64 }
    ///
    /// let by_id = Equal::<u64>::derived().contramap(|u: &User| &u.id);
    /// assert!(by_id.eq(&User { id: 1 }, &User { id: 1 }));
    /// ```
    pub fn contramap<B, F>(self, f: F) -> Equal<B>
    where
        F: Fn(&B) -> &A + 'static,
    {
        Equal::from_fn(move |a: &B, b: &B| (self.eq)(f(a), f(b)))
    }

    /// Lift this strategy to options: two `Some`s compare by the inner
    /// strategy, two `None`s are equal, and mixed variants are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Equal;
    ///
    /// let eq = Equal::<i32>::derived().option();
    /// assert!(eq.eq(&Some(1), &Some(1)));
    /// assert!(eq.eq(&None, &None));
    /// assert!(!eq.eq(&Some(1), &None));
    /// ```
    pub fn option(self) -> Equal<Option<A>> {
        Equal::from_fn(move |a: &Option<A>, b: &Option<A>| match (a, b) {
            (Some(a), Some(b)) => (self.eq)(a, b),
            (None, None) => true,
            _ => false,
        })
    }
}

/// An ordering strategy: a pure total comparison over `A`.
///
/// # Laws
///
/// `compare` must define a consistent total order: antisymmetric,
/// transitive, and total. No two distinct inputs may each be less than the
/// other.
pub struct Order<A: ?Sized> {
    cmp: Box<dyn Fn(&A, &A) -> Ordering>,
}

impl<A: ?Sized> fmt::Debug for Order<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Order(..)")
    }
}

impl<A: ?Sized> Order<A> {
    /// Build an ordering strategy from a comparison function.
    pub fn from_fn<F>(cmp: F) -> Self
    where
        F: Fn(&A, &A) -> Ordering + 'static,
    {
        Order { cmp: Box::new(cmp) }
    }

    /// Compare two values under this strategy.
    pub fn compare(&self, a: &A, b: &A) -> Ordering {
        (self.cmp)(a, b)
    }
}

impl<A: Ord + 'static> Order<A> {
    /// The strategy induced by the type's own `Ord`.
    pub fn derived() -> Self {
        Order::from_fn(|a: &A, b: &A| a.cmp(b))
    }
}

impl<A> Order<A> {
    /// Adapt this strategy to another type via a projection.
    pub fn contramap<B, F>(self, f: F) -> Order<B>
    where
        F: Fn(&B) -> &A + 'static,
        A: 'static,
    {
        Order::from_fn(move |a: &B, b: &B| (self.cmp)(f(a), f(b)))
    }

    /// The smaller of two values under this strategy; ties favor the first.
    pub fn min(&self, a: A, b: A) -> A {
        match self.compare(&a, &b) {
            Ordering::Greater => b,
            _ => a,
        }
    }

    /// The larger of two values under this strategy; ties favor the first.
    pub fn max(&self, a: A, b: A) -> A {
        match self.compare(&a, &b) {
            Ordering::Less => b,
            _ => a,
        }
    }
}

/// A rendering strategy: a pure, deterministic, total function from `A` to
/// its diagnostic text.
///
/// `Show` is for diagnostics only - joining error lists, logging sequences -
/// never for persistence or round-tripping.
pub struct Show<A: ?Sized> {
    show: Box<dyn Fn(&A) -> String>,
}

impl<A: ?Sized> fmt::Debug for Show<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Show(..)")
    }
}

impl<A: ?Sized> Show<A> {
    /// Build a rendering strategy from a function.
    pub fn from_fn<F>(show: F) -> Self
    where
        F: Fn(&A) -> String + 'static,
    {
        Show {
            show: Box::new(show),
        }
    }

    /// Render a value under this strategy.
    pub fn show(&self, a: &A) -> String {
        (self.show)(a)
    }
}

impl<A: fmt::Display + 'static> Show<A> {
    /// The strategy induced by the type's own `Display`.
    pub fn from_display() -> Self {
        Show::from_fn(|a: &A| a.to_string())
    }
}

impl<A: fmt::Debug + 'static> Show<A> {
    /// The strategy induced by the type's own `Debug`.
    pub fn from_debug() -> Self {
        Show::from_fn(|a: &A| format!("{:?}", a))
    }
}
