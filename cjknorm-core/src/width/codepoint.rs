//! Per-character width conversion by codepoint offset
//!
//! Printable ASCII U+0021..U+007E sits exactly 0xFEE0 below the fullwidth
//! forms U+FF01..U+FF5E. Space pairs with the ideographic space U+3000.

const IDEOGRAPHIC_SPACE: char = '\u{3000}';
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Typographic sources in `FH_PUNCTUATION` that live outside the fullwidth block.
const TYPOGRAPHIC_TO_ASCII: [(char, char); 5] = [
    ('”', '"'),
    ('’', '\''),
    ('‘', '`'),
    ('￥', '\\'),
    ('‐', '-'),
];

/// Convert half-width space, letters, digits and punctuation to full-width.
///
/// ```
/// use cjknorm_core::str_half2full;
///
/// assert_eq!(str_half2full("AB 12"), "ＡＢ　１２");
/// ```
pub fn str_half2full(text: &str) -> String {
    text.chars().map(half_to_full).collect()
}

/// Convert full-width space, letters, digits and punctuation to half-width.
pub fn str_full2half(text: &str) -> String {
    text.chars().map(full_to_half).collect()
}

/// Full-width form of one character, or the character itself.
pub fn half_to_full(ch: char) -> char {
    match ch {
        ' ' => IDEOGRAPHIC_SPACE,
        '\u{21}'..='\u{7e}' => shift(ch, |code| code + FULLWIDTH_OFFSET),
        _ => ch,
    }
}

/// Half-width form of one character, or the character itself.
pub fn full_to_half(ch: char) -> char {
    match ch {
        IDEOGRAPHIC_SPACE => ' ',
        '\u{ff01}'..='\u{ff5e}' => shift(ch, |code| code - FULLWIDTH_OFFSET),
        _ => TYPOGRAPHIC_TO_ASCII
            .iter()
            .find(|(typographic, _)| *typographic == ch)
            .map_or(ch, |&(_, ascii)| ascii),
    }
}

fn shift(ch: char, op: impl Fn(u32) -> u32) -> char {
    // Both ranges are fully assigned scalar values.
    char::from_u32(op(u32::from(ch))).unwrap_or(ch)
}
