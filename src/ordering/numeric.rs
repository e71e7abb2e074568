//! Numeric string comparison
//!
//! Compares strings by the numbers they spell, not their characters.
//! Integer fast path first (most dimension values are integers), then
//! arbitrary-precision decimal so "1.0" and "1.00" compare equal, then a
//! lexicographic fallback so unparsable input still has a stable order.

use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Compares two strings by numeric value.
///
/// An operand that parses on neither path sorts before one that does; two
/// such operands fall back to lexicographic order.
pub(crate) fn compare(o1: &str, o2: &str) -> Ordering {
    let long1 = o1.parse::<i64>().ok();
    let long2 = o2.parse::<i64>().ok();

    if let (Some(l1), Some(l2)) = (long1, long2) {
        return l1.cmp(&l2);
    }

    // At least one side overflows i64 or is not an integer; an i64 that did
    // parse converts to decimal exactly.
    let bd1 = long1.map(BigDecimal::from).or_else(|| parse_decimal(o1));
    let bd2 = long2.map(BigDecimal::from).or_else(|| parse_decimal(o2));

    match (bd1, bd2) {
        (Some(bd1), Some(bd2)) => bd1.cmp(&bd2),
        // Both unparsable: lexicographic keeps the order well-defined
        // instead of collapsing everything unparsable into one rank.
        (None, None) => o1.cmp(o2),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

fn parse_decimal(input: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(input).ok()
}

#[cfg(test)]
mod tests {
    use super::compare;
    use std::cmp::Ordering;

    #[test]
    fn test_integer_fast_path() {
        assert_eq!(compare("2", "10"), Ordering::Less);
        assert_eq!(compare("-5", "3"), Ordering::Less);
        assert_eq!(compare("42", "42"), Ordering::Equal);
    }

    #[test]
    fn test_decimal_fallback() {
        assert_eq!(compare("1.5", "2"), Ordering::Less);
        assert_eq!(compare("2.5", "2"), Ordering::Greater);
        assert_eq!(compare("-0.01", "0"), Ordering::Less);
    }

    #[test]
    fn test_equal_value_different_representation() {
        assert_eq!(compare("1.0", "1.00"), Ordering::Equal);
        assert_eq!(compare("0.5", ".5"), Ordering::Equal);
        assert_eq!(compare("1e2", "100"), Ordering::Equal);
    }

    #[test]
    fn test_values_beyond_i64() {
        assert_eq!(
            compare("9223372036854775808", "9223372036854775807"),
            Ordering::Greater
        );
        assert_eq!(
            compare("99999999999999999999", "100000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_unparsable_sorts_first() {
        assert_eq!(compare("abc", "10"), Ordering::Less);
        assert_eq!(compare("10", "abc"), Ordering::Greater);
    }

    #[test]
    fn test_both_unparsable_falls_back_to_lexicographic() {
        assert_eq!(compare("abc", "xyz"), "abc".cmp("xyz"));
        assert_eq!(compare("xyz", "abc"), Ordering::Greater);
        assert_eq!(compare("abc", "abc"), Ordering::Equal);
    }
}
