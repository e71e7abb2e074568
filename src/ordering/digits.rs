//! Digit classification across Unicode digit blocks
//!
//! The alphanumeric strategy treats a character as a digit if it falls in one
//! of a fixed set of decimal-digit blocks, mapped to 0-9 independent of
//! script. The set is data-driven: adding a block is a table edit.

/// Inclusive `(first, last)` bounds of each recognized decimal-digit block.
///
/// ASCII, Arabic-Indic, Extended Arabic-Indic, Devanagari, fullwidth.
const DIGIT_BLOCKS: &[(char, char)] = &[
    ('0', '9'),
    ('\u{0660}', '\u{0669}'),
    ('\u{06F0}', '\u{06F9}'),
    ('\u{0966}', '\u{096F}'),
    ('\u{FF10}', '\u{FF19}'),
];

/// Returns the numeric value 0-9 of `ch` if it is a recognized decimal
/// digit, or `None` otherwise.
pub(crate) fn digit_value(ch: char) -> Option<u32> {
    DIGIT_BLOCKS
        .iter()
        .find(|(first, last)| (*first..=*last).contains(&ch))
        .map(|(first, _)| ch as u32 - *first as u32)
}

/// Whether `ch` is a decimal digit in any recognized block.
pub(crate) fn is_digit(ch: char) -> bool {
    digit_value(ch).is_some()
}

/// Whether `ch` is the zero digit of any recognized block.
pub(crate) fn is_zero(ch: char) -> bool {
    digit_value(ch) == Some(0)
}
