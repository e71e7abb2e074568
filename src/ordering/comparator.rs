//! String comparator strategies
//!
//! A closed set of six total-ordering strategies over optional text values.
//! Each strategy is a zero-sized variant: identity, equality, and hashing
//! follow the variant tag, and comparison dispatches through one exhaustive
//! match. Null (`None`) sorts before any non-null value in every strategy.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::OrderingError;
use super::registry;
use super::{alphanumeric, numeric, version};

/// Cache-key discriminants, one byte per strategy. Stable across runs and
/// releases for as long as the strategy's semantics are unchanged; external
/// callers concatenate them into query-plan fingerprints.
const LEXICOGRAPHIC_CACHE_ID: u8 = 0x01;
const ALPHANUMERIC_CACHE_ID: u8 = 0x02;
const NUMERIC_CACHE_ID: u8 = 0x03;
const STRLEN_CACHE_ID: u8 = 0x04;
const VERSION_CACHE_ID: u8 = 0x05;
const NATURAL_CACHE_ID: u8 = 0x06;

/// A pluggable total-ordering strategy for text dimension values.
///
/// Strategies are stateless and `Copy`; two values of the same variant are
/// interchangeable. Serialized form is the lowercase strategy name, the same
/// name the registry resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringComparator {
    /// Character-code order of the full string.
    Lexicographic,
    /// Digit-aware natural order: embedded digit runs compare numerically.
    Alphanumeric,
    /// Numeric value order with arbitrary-precision fallback.
    Numeric,
    /// Character count, ties broken lexicographically.
    Strlen,
    /// Dotted/qualifier version order.
    Version,
    /// Sigil: the column's native type already orders itself. Calling
    /// [`compare`](Self::compare) on this variant is a caller bug and panics.
    Natural,
}

impl StringComparator {
    /// Compares two optional text values under this strategy.
    ///
    /// Total order for every strategy except [`Natural`](Self::Natural):
    /// null sorts first, two nulls are equal.
    ///
    /// # Panics
    ///
    /// Panics for the `Natural` variant: the executor must dispatch on the
    /// column's native type instead of comparing through this strategy.
    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        match self {
            StringComparator::Lexicographic => nulls_first(a, b, str::cmp),
            StringComparator::Alphanumeric => nulls_first(a, b, alphanumeric::compare),
            StringComparator::Numeric => nulls_first(a, b, numeric::compare),
            StringComparator::Strlen => nulls_first(a, b, strlen_compare),
            StringComparator::Version => nulls_first(a, b, version::compare),
            StringComparator::Natural => {
                panic!("{}", OrderingError::NaturalCompareUnsupported)
            }
        }
    }

    /// The persisted name of this strategy.
    pub const fn name(&self) -> &'static str {
        match self {
            StringComparator::Lexicographic => registry::LEXICOGRAPHIC_NAME,
            StringComparator::Alphanumeric => registry::ALPHANUMERIC_NAME,
            StringComparator::Numeric => registry::NUMERIC_NAME,
            StringComparator::Strlen => registry::STRLEN_NAME,
            StringComparator::Version => registry::VERSION_NAME,
            StringComparator::Natural => registry::NATURAL_NAME,
        }
    }

    /// The one-byte cache-key discriminant of this strategy.
    pub const fn cache_key(&self) -> [u8; 1] {
        match self {
            StringComparator::Lexicographic => [LEXICOGRAPHIC_CACHE_ID],
            StringComparator::Alphanumeric => [ALPHANUMERIC_CACHE_ID],
            StringComparator::Numeric => [NUMERIC_CACHE_ID],
            StringComparator::Strlen => [STRLEN_CACHE_ID],
            StringComparator::Version => [VERSION_CACHE_ID],
            StringComparator::Natural => [NATURAL_CACHE_ID],
        }
    }
}

impl fmt::Display for StringComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StringComparator {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::resolve(s)
    }
}

/// Null-handling shared by every strategy: null sorts before non-null, two
/// nulls are equal, two non-nulls defer to the strategy's value comparison.
fn nulls_first(
    a: Option<&str>,
    b: Option<&str>,
    cmp: impl Fn(&str, &str) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

/// Character count ascending, full-string lexicographic tiebreak.
fn strlen_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}
