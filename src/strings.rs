//! String boundary helpers
//!
//! Small adapters that turn raw, possibly-empty strings into honest options
//! at the edge of the system, plus the case-insensitive [`Equal`] and
//! [`Order`] strategies used when exact identity is too strict. None of
//! these participate in the accumulation algorithm; validations consume them
//! as predicates and projections.
//!
//! # Examples
//!
//! ```
//! use tidepool::strings::{digits_only, non_blank};
//!
//! assert_eq!(non_blank("  Batman  "), Some("  Batman  "));
//! assert_eq!(non_blank("   "), None);
//!
//! assert_eq!(digits_only("a1b2c3"), Some("123".to_string()));
//! assert_eq!(digits_only("letters"), None);
//! ```

use crate::{Equal, Order};

/// The input, unless it is empty or contains only whitespace.
///
/// # Examples
///
/// ```
/// use tidepool::strings::non_blank;
///
/// assert_eq!(non_blank("Luke"), Some("Luke"));
/// assert_eq!(non_blank(""), None);
/// assert_eq!(non_blank(" \t\n"), None);
/// ```
pub fn non_blank(input: &str) -> Option<&str> {
    Some(input).filter(|s| !s.trim().is_empty())
}

/// The input, unless it is empty.
pub fn non_empty(input: &str) -> Option<&str> {
    Some(input).filter(|s| !s.is_empty())
}

/// The digit characters of the input, in order, unless there are none.
///
/// # Examples
///
/// ```
/// use tidepool::strings::digits_only;
///
/// assert_eq!(digits_only("+52 (55) 1234"), Some("52551234".to_string()));
/// assert_eq!(digits_only("no digits here"), None);
/// ```
pub fn digits_only(input: &str) -> Option<String> {
    Some(
        input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>(),
    )
    .filter(|s| !s.is_empty())
}

/// Case-insensitive string equality.
///
/// ASCII case folding; an equivalence relation (reflexive, symmetric,
/// transitive) even though it is coarser than exact identity.
///
/// # Examples
///
/// ```
/// use tidepool::strings::ignore_case_equal;
///
/// let eq = ignore_case_equal();
/// assert!(eq.eq(&"BaTmAn".to_string(), &"batman".to_string()));
/// ```
pub fn ignore_case_equal() -> Equal<String> {
    Equal::from_fn(|a: &String, b: &String| a.eq_ignore_ascii_case(b))
}

/// Case-insensitive total order over strings.
///
/// Compares ASCII-lowercased forms, so `"apple" < "Banana"`.
pub fn ignore_case_order() -> Order<String> {
    Order::from_fn(|a: &String, b: &String| {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    })
}

/// True when both strings are non-empty and equal under the strategy.
///
/// The empty string counts as absent, so it never compares equal to
/// anything - including another empty string.
///
/// # Examples
///
/// ```
/// use tidepool::strings::{ignore_case_equal, present_and_equal};
///
/// let eq = ignore_case_equal();
/// assert!(present_and_equal(&eq, "Hero", "hero"));
/// assert!(!present_and_equal(&eq, "", ""));
/// ```
pub fn present_and_equal(eq: &Equal<String>, a: &str, b: &str) -> bool {
    crate::maybe::both_equal_by(
        eq,
        &non_empty(a).map(str::to_string),
        &non_empty(b).map(str::to_string),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("Luke"), Some("Luke"));
        assert_eq!(non_blank("  padded  "), Some("  padded  "));
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank("\t\n"), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(" "), Some(" "));
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("a1b2c3"), Some("123".to_string()));
        assert_eq!(digits_only("12345"), Some("12345".to_string()));
        assert_eq!(digits_only("abc"), None);
        assert_eq!(digits_only(""), None);
    }

    #[test]
    fn test_ignore_case_equal() {
        let eq = ignore_case_equal();
        assert!(eq.eq(&"BaTmAn".to_string(), &"batman".to_string()));
        assert!(!eq.eq(&"batman".to_string(), &"robin".to_string()));
    }

    #[test]
    fn test_ignore_case_order_is_consistent() {
        let ord = ignore_case_order();
        let apple = "apple".to_string();
        let banana = "Banana".to_string();
        assert_eq!(ord.compare(&apple, &banana), Ordering::Less);
        assert_eq!(ord.compare(&banana, &apple), Ordering::Greater);
        assert_eq!(
            ord.compare(&"MIXED".to_string(), &"mixed".to_string()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_present_and_equal_treats_empty_as_absent() {
        let eq = ignore_case_equal();
        assert!(present_and_equal(&eq, "Hero", "HERO"));
        assert!(!present_and_equal(&eq, "Hero", ""));
        assert!(!present_and_equal(&eq, "", ""));
    }
}
