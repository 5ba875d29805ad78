//! An unbiased sum type holding exactly one of two alternatives
//!
//! `Either<L, R>` carries no inherent success/failure meaning: both variants
//! are peers, and the projections are symmetric. By convention validation
//! code puts the failure on the left and the success on the right, which is
//! the orientation [`Validation`](crate::Validation) fixes permanently.
//!
//! Use `Either` when you need to preserve both sides of a computation
//! (cached vs fresh data, hero vs villain); use `Result` when one side is an
//! error you want to propagate with `?`; use `Validation` when errors should
//! accumulate.
//!
//! # Examples
//!
//! ```rust
//! use tidepool::Either;
//!
//! let characters: Vec<Either<&str, &str>> = vec![
//!     Either::left("joker"),
//!     Either::right("batman"),
//!     Either::left("lex luthor"),
//! ];
//!
//! let names: Vec<String> = characters
//!     .into_iter()
//!     .map(|c| c.fold(|v| v.to_lowercase(), |h| h.to_uppercase()))
//!     .collect();
//! assert_eq!(names, vec!["joker", "BATMAN", "lex luthor"]);
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Both variants are peers; no projection silently favors one side. The sole
/// exhaustive elimination is [`fold`](Either::fold), which forces the caller
/// to handle both alternatives.
///
/// # Example
///
/// ```rust
/// use tidepool::Either;
///
/// let e: Either<i32, &str> = Either::right("hello");
/// let description = e.fold(
///     |n| format!("number: {}", n),
///     |s| format!("string: {}", s),
/// );
/// assert_eq!(description, "string: hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative
    Left(L),
    /// The right alternative
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a `Left` value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right` value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` for a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` for a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Eliminate the sum by handling both alternatives.
    ///
    /// This is the only total extraction; everything else in this module is
    /// definable in terms of it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(3);
    /// assert_eq!(left.fold(|n| n * 2, |s| s.len() as i32), 6);
    /// ```
    #[inline]
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Transform the left value, leaving a `Right` untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(2);
    /// assert_eq!(e.map_left(|n| n * 10), Either::left(20));
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, leaving a `Left` untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hi");
    /// assert_eq!(e.map_right(str::len), Either::right(2));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Exchange the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// The left value, if this is a `Left`.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right value, if this is a `Right`.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Keep the right value, discarding a `Left` entirely.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Either;
    ///
    /// let r: Either<&str, i32> = Either::right(7);
    /// assert_eq!(r.into_option(), Some(7));
    ///
    /// let l: Either<&str, i32> = Either::left("gone");
    /// assert_eq!(l.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<R> {
        self.into_right()
    }
}

/// The left payloads of a sequence, in their original relative order.
///
/// # Example
///
/// ```rust
/// use tidepool::either::{lefts, Either};
///
/// let items: Vec<Either<&str, i32>> =
///     vec![Either::left("a"), Either::right(1), Either::left("b")];
/// assert_eq!(lefts(items), vec!["a", "b"]);
/// ```
pub fn lefts<L, R, I>(iter: I) -> Vec<L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_left).collect()
}

/// The right payloads of a sequence, in their original relative order.
///
/// # Example
///
/// ```rust
/// use tidepool::either::{rights, Either};
///
/// let items: Vec<Either<&str, i32>> =
///     vec![Either::left("a"), Either::right(1), Either::right(2)];
/// assert_eq!(rights(items), vec![1, 2]);
/// ```
pub fn rights<L, R, I>(iter: I) -> Vec<R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_right).collect()
}

/// Split a sequence into its left and right payloads.
///
/// Each sublist preserves the original relative order and every element is
/// classified into exactly one of them, so the lengths always sum to the
/// input length.
///
/// # Example
///
/// ```rust
/// use tidepool::either::{partition, Either};
///
/// let items: Vec<Either<&str, i32>> =
///     vec![Either::right(1), Either::left("x"), Either::right(2)];
/// let (ls, rs) = partition(items);
/// assert_eq!(ls, vec!["x"]);
/// assert_eq!(rs, vec![1, 2]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut ls = Vec::new();
    let mut rs = Vec::new();
    for item in iter {
        match item {
            Either::Left(l) => ls.push(l),
            Either::Right(r) => rs.push(r),
        }
    }
    (ls, rs)
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}
