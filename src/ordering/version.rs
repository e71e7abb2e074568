//! Version string comparison
//!
//! Artifact-style dotted/qualifier versions: "major.minor.incremental" with
//! an optional "-qualifier" suffix. Numeric components compare numerically
//! with missing components treated as zero; qualifiers compare
//! lexicographically with a missing qualifier treated as empty. Parsing is
//! best-effort and never fails: input whose dotted part is not numeric
//! degrades to a pure-qualifier token, keeping the order total.

use std::cmp::Ordering;

/// Token sequence parsed from one version string.
#[derive(Debug, PartialEq, Eq)]
struct VersionTokens<'a> {
    numeric: Vec<u64>,
    qualifier: &'a str,
}

/// Compares two version strings left to right over their token sequences.
pub(crate) fn compare(o1: &str, o2: &str) -> Ordering {
    let v1 = parse(o1);
    let v2 = parse(o2);

    let components = v1.numeric.len().max(v2.numeric.len());
    for i in 0..components {
        let n1 = v1.numeric.get(i).copied().unwrap_or(0);
        let n2 = v2.numeric.get(i).copied().unwrap_or(0);
        match n1.cmp(&n2) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }

    v1.qualifier.cmp(v2.qualifier)
}

/// Splits a version string into dotted numeric components and a qualifier.
///
/// The qualifier starts at the first '-'. A non-numeric dotted component
/// turns the entire input into the qualifier (zero numeric components).
fn parse(input: &str) -> VersionTokens<'_> {
    let (dotted, qualifier) = match input.split_once('-') {
        Some((dotted, qualifier)) => (dotted, qualifier),
        None => (input, ""),
    };

    let mut numeric = Vec::new();
    for component in dotted.split('.') {
        match component.parse::<u64>() {
            Ok(value) => numeric.push(value),
            Err(_) => {
                return VersionTokens {
                    numeric: Vec::new(),
                    qualifier: input,
                };
            }
        }
    }

    VersionTokens { numeric, qualifier }
}

#[cfg(test)]
mod tests {
    use super::{compare, parse};
    use std::cmp::Ordering;

    #[test]
    fn test_numeric_components_compare_numerically() {
        assert_eq!(compare("1.2.0", "1.10.0"), Ordering::Less);
        assert_eq!(compare("2.0.0", "10.0.0"), Ordering::Less);
        assert_eq!(compare("1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn test_missing_components_are_zero() {
        assert_eq!(compare("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare("1", "1.0.1"), Ordering::Less);
        assert_eq!(compare("1.2.1", "1.2"), Ordering::Greater);
    }

    #[test]
    fn test_qualifiers_compare_lexicographically() {
        assert_eq!(compare("1.0-alpha", "1.0-beta"), Ordering::Less);
        assert_eq!(compare("1.0-rc1", "1.0-rc1"), Ordering::Equal);
        // Missing qualifier is empty, so a release precedes its qualifiers
        assert_eq!(compare("1.0", "1.0-alpha"), Ordering::Less);
    }

    #[test]
    fn test_numeric_components_dominate_qualifier() {
        assert_eq!(compare("1.1-alpha", "1.0-beta"), Ordering::Greater);
        assert_eq!(compare("1.0-zz", "1.1"), Ordering::Less);
    }

    #[test]
    fn test_unparsable_degrades_to_qualifier_token() {
        assert_eq!(parse("banana").numeric, Vec::<u64>::new());
        assert_eq!(parse("banana").qualifier, "banana");
        assert_eq!(compare("apple", "banana"), Ordering::Less);
        assert_eq!(compare("banana", "banana"), Ordering::Equal);
        // Zero numeric components, so any parsed version beats a bare word
        // only through the component loop seeing all zeros
        assert_eq!(compare("1.0", "banana"), Ordering::Greater);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(compare("", ""), Ordering::Equal);
        assert_eq!(compare("", "1.0"), Ordering::Less);
    }
}
