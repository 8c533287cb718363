//! Page identifier type.

use std::fmt;

use num_bigint::BigUint;

/// Identifies a virtual page referenced by a trace.
///
/// Page numbers are non-negative and unbounded, so the value is held as an
/// arbitrary-width integer. Ordering is numeric.
///
/// # Example
/// ```
/// use vmsim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.to_string(), "42");
///
/// let wide = PageId::from_digits("18446744073709551616").unwrap();
/// assert!(wide > PageId::new(u64::MAX));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(BigUint);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u64) -> Self {
        PageId(BigUint::from(id))
    }

    /// Parse a decimal page number of any width.
    ///
    /// Only ASCII digits are accepted; signs, separators, decimals and
    /// exponents return `None`. Leading zeros are ignored.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        BigUint::parse_bytes(digits.as_bytes(), 10).map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid, PageId::from_digits("42").unwrap());
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
        // Numeric, not lexicographic.
        assert!(PageId::new(9) < PageId::new(10));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
    }

    #[test]
    fn test_from_digits_beyond_u64() {
        let pid = PageId::from_digits("18446744073709551616").unwrap();
        assert_eq!(pid.to_string(), "18446744073709551616");
        assert!(pid > PageId::new(u64::MAX));

        let huge = "9".repeat(60);
        assert_eq!(PageId::from_digits(&huge).unwrap().to_string(), huge);
    }

    #[test]
    fn test_from_digits_strips_leading_zeros() {
        assert_eq!(PageId::from_digits("007"), Some(PageId::new(7)));
        assert_eq!(PageId::from_digits("000"), Some(PageId::new(0)));
    }

    #[test]
    fn test_from_digits_rejects_non_digits() {
        for token in ["", "-3", "+4", "1_000", "2.5", "1e3", "0x10", " 1"] {
            assert_eq!(PageId::from_digits(token), None, "{token:?}");
        }
    }
}
