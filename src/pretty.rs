//! Diagnostic rendering of sequences
//!
//! Renders an ordered sequence as `"[e1, e2, e3]"`: elements joined by
//! `", "` inside square brackets, an empty sequence rendering as `"[]"`.
//! This literal format is the one observable serialization contract in the
//! library and is preserved bit-exact; rendering is one-directional and no
//! parser exists.
//!
//! # Examples
//!
//! ```
//! use tidepool::pretty::render;
//!
//! assert_eq!(render(vec![1, 2, 3]), "[1, 2, 3]");
//! assert_eq!(render(Vec::<i32>::new()), "[]");
//! ```

use crate::Show;
use std::fmt::Display;

/// Render a sequence using each element's `Display` impl.
///
/// # Examples
///
/// ```
/// use tidepool::pretty::render;
///
/// assert_eq!(render(vec!["a", "b"]), "[a, b]");
/// ```
pub fn render<T, I>(iter: I) -> String
where
    T: Display,
    I: IntoIterator<Item = T>,
{
    let mut out = String::from("[");
    for (i, item) in iter.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_string());
    }
    out.push(']');
    out
}

/// Render a sequence using an explicit [`Show`] strategy.
///
/// # Examples
///
/// ```
/// use tidepool::pretty::render_with;
/// use tidepool::Show;
///
/// let quoted = Show::<&str>::from_debug();
/// assert_eq!(render_with(vec!["a", "b"], &quoted), "[\"a\", \"b\"]");
/// ```
pub fn render_with<T, I>(iter: I, show: &Show<T>) -> String
where
    I: IntoIterator<Item = T>,
{
    let mut out = String::from("[");
    for (i, item) in iter.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&show.show(&item));
    }
    out.push(']');
    out
}
