//! # Comparator Registry
//!
//! Resolves persisted comparator names to their singleton strategies. The
//! strategy set is closed, so the registry is a pure lookup over the six
//! name constants; it is initialized at compile time and never re-resolved
//! during execution.

use super::comparator::StringComparator;
use super::errors::{OrderingError, OrderingResult};

/// Persisted name of the lexicographic strategy.
pub const LEXICOGRAPHIC_NAME: &str = "lexicographic";
/// Persisted name of the alphanumeric (natural sort) strategy.
pub const ALPHANUMERIC_NAME: &str = "alphanumeric";
/// Persisted name of the numeric strategy.
pub const NUMERIC_NAME: &str = "numeric";
/// Persisted name of the string-length strategy.
pub const STRLEN_NAME: &str = "strlen";
/// Persisted name of the version strategy.
pub const VERSION_NAME: &str = "version";
/// Persisted name of the natural-ordering sigil.
pub const NATURAL_NAME: &str = "natural";

/// Every registered strategy, in cache-key order.
pub const ALL: [StringComparator; 6] = [
    StringComparator::Lexicographic,
    StringComparator::Alphanumeric,
    StringComparator::Numeric,
    StringComparator::Strlen,
    StringComparator::Version,
    StringComparator::Natural,
];

/// Resolves a persisted comparator name to its strategy.
///
/// Names are matched exactly; an unrecognized name is a configuration error
/// surfaced to the caller, never defaulted.
pub fn resolve(name: &str) -> OrderingResult<StringComparator> {
    match name {
        LEXICOGRAPHIC_NAME => Ok(StringComparator::Lexicographic),
        ALPHANUMERIC_NAME => Ok(StringComparator::Alphanumeric),
        NUMERIC_NAME => Ok(StringComparator::Numeric),
        STRLEN_NAME => Ok(StringComparator::Strlen),
        VERSION_NAME => Ok(StringComparator::Version),
        NATURAL_NAME => Ok(StringComparator::Natural),
        _ => Err(OrderingError::UnknownComparator(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_registered_name() {
        for strategy in ALL {
            assert_eq!(resolve(strategy.name()).unwrap(), strategy);
        }
    }

    #[test]
    fn test_resolve_is_exact_match() {
        assert!(resolve("Lexicographic").is_err());
        assert!(resolve("lexicographic ").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        match resolve("fancy") {
            Err(OrderingError::UnknownComparator(name)) => assert_eq!(name, "fancy"),
            other => panic!("expected UnknownComparator, got {other:?}"),
        }
    }

    #[test]
    fn test_registered_names_are_distinct() {
        let mut names: Vec<&str> = ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}
