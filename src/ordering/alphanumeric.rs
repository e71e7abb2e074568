//! Digit-aware "natural" string comparison
//!
//! Splits both strings into maximal alternating runs of digit and non-digit
//! characters and compares run-by-run, so "item10" sorts after "item2".
//!
//! Run rules:
//! - A digit run sorts before a non-digit run at the same position
//! - Digit runs compare by numeric value; leading zeros are skipped but
//!   counted, and equal values tie-break on fewer leading zeros first
//! - Non-digit runs compare case-insensitively
//! - When all runs are equal the shorter string sorts first

use std::cmp::Ordering;

use super::digits::{is_digit, is_zero};

/// Byte offsets of the comparison cursor into each string.
struct Cursor {
    pos0: usize,
    pos1: usize,
}

/// Compares two strings in digit-aware natural order.
pub(crate) fn compare(str0: &str, str1: &str) -> Ordering {
    if str0.is_empty() {
        return if str1.is_empty() {
            Ordering::Equal
        } else {
            Ordering::Less
        };
    }
    if str1.is_empty() {
        return Ordering::Greater;
    }

    let mut cur = Cursor { pos0: 0, pos1: 0 };

    while cur.pos0 < str0.len() && cur.pos1 < str1.len() {
        let digit0 = char_at(str0, cur.pos0).is_some_and(is_digit);
        let digit1 = char_at(str1, cur.pos1).is_some_and(is_digit);

        let result = match (digit0, digit1) {
            (true, true) => compare_digit_runs(str0, str1, &mut cur),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_text_runs(str0, str1, &mut cur),
        };

        if result != Ordering::Equal {
            return result;
        }
    }

    // All runs equal; the string with characters left over is larger.
    let rest0 = cur.pos0 < str0.len();
    let rest1 = cur.pos1 < str1.len();
    rest0.cmp(&rest1)
}

/// Compares the digit runs starting at the cursor, advancing it past them.
///
/// Leading zeros are skipped but counted. The first differing significant
/// digit decides, unless one run has fewer significant digits (it is the
/// smaller number). Fully equal significant digits fall back to the
/// leading-zero counts, fewer zeros first.
fn compare_digit_runs(str0: &str, str1: &str, cur: &mut Cursor) -> Ordering {
    let zeros0 = skip_zeros(str0, &mut cur.pos0);
    let zeros1 = skip_zeros(str1, &mut cur.pos1);
    let mut delta = Ordering::Equal;

    loop {
        let d0 = next_digit(str0, &mut cur.pos0);
        let d1 = next_digit(str1, &mut cur.pos1);

        match (d0, d1) {
            (None, None) => {
                return if delta != Ordering::Equal {
                    delta
                } else {
                    zeros0.cmp(&zeros1)
                };
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(v0), Some(v1)) => {
                if delta == Ordering::Equal {
                    delta = v0.cmp(&v1);
                }
            }
        }
    }
}

/// Compares the non-digit runs starting at the cursor, advancing it past
/// them. The full contiguous runs compare case-insensitively.
fn compare_text_runs(str0: &str, str1: &str, cur: &mut Cursor) -> Ordering {
    let start0 = cur.pos0;
    let start1 = cur.pos1;
    cur.pos0 = run_end(str0, cur.pos0, |ch| !is_digit(ch));
    cur.pos1 = run_end(str1, cur.pos1, |ch| !is_digit(ch));

    let run0 = &str0[start0..cur.pos0];
    let run1 = &str1[start1..cur.pos1];
    run0.chars()
        .flat_map(char::to_lowercase)
        .cmp(run1.chars().flat_map(char::to_lowercase))
}

/// Advances `pos` past the zero digits at the front of the run, returning
/// how many were skipped.
fn skip_zeros(s: &str, pos: &mut usize) -> usize {
    let mut count = 0;
    while let Some(ch) = char_at(s, *pos) {
        if !is_zero(ch) {
            break;
        }
        count += 1;
        *pos += ch.len_utf8();
    }
    count
}

/// Consumes the digit at `pos` and returns its numeric value, or `None`
/// without advancing when the run (or the string) has ended.
fn next_digit(s: &str, pos: &mut usize) -> Option<u32> {
    let ch = char_at(s, *pos)?;
    let value = super::digits::digit_value(ch)?;
    *pos += ch.len_utf8();
    Some(value)
}

/// Byte offset just past the contiguous characters satisfying `pred`,
/// starting from `pos`. Always consumes at least one character.
fn run_end(s: &str, pos: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = pos;
    for ch in s[pos..].chars() {
        if end > pos && !pred(ch) {
            break;
        }
        end += ch.len_utf8();
    }
    end
}

fn char_at(s: &str, pos: usize) -> Option<char> {
    s[pos..].chars().next()
}
