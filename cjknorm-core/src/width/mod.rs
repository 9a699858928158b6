//! Full-width/half-width conversion
//!
//! Two independent entry points:
//!
//! - [`convert`] applies pair tables in sequence. Every pair rewrites the
//!   output of the previous one, so a later pair can convert text an earlier
//!   pair produced.
//! - [`str_half2full`] and [`str_full2half`] convert character by character
//!   using codepoint arithmetic. They agree with the tables on every table
//!   entry.
//!
//! # Example
//!
//! ```rust
//! use cjknorm_core::width::{convert, SkipSet, FH_ASCII};
//!
//! assert_eq!(convert("ＡＢＣ１２３", &[FH_ASCII], None).unwrap(), "ABC123");
//!
//! let skip = SkipSet::from("1");
//! assert_eq!(convert("ＡＢＣ１２３", &[FH_ASCII], Some(&skip)).unwrap(), "ABC１23");
//! ```

pub mod codepoint;
pub mod map;
pub mod tables;

use crate::error::{CjkNormError, Result};

pub use codepoint::{full_to_half, half_to_full, str_full2half, str_half2full};
pub use map::{
    CharMap, CharPair, Map, SkipSet, FH_ASCII, HF_ALPHA, HF_ASCII, HF_NUM, HF_PUNCTUATION,
};
pub use tables::{Pair, FH_ALPHA, FH_NUM, FH_PUNCTUATION, FH_SPACE, HF_SPACE};

/// Apply `maps` to `text` in order, pair by pair.
///
/// A pair is left out when its source or its target is a single character
/// in `skip`. Fails with `MalformedMap` when a pair has an empty source.
pub fn convert(text: &str, maps: &[Map<'_>], skip: Option<&SkipSet>) -> Result<String> {
    let mut output = text.to_string();

    for map in maps {
        let pairs = map.resolve();
        for (index, &(from, to)) in pairs.iter().enumerate() {
            if from.is_empty() {
                return Err(CjkNormError::MalformedMap {
                    map: map.name().to_string(),
                    index,
                    reason: "empty source".to_string(),
                });
            }
            if skip.is_some_and(|skip| skip.skips_pair(from, to)) {
                tracing::trace!(from, to, "skipping pair");
                continue;
            }
            if output.contains(from) {
                output = output.replace(from, to);
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_ascii() {
        assert_eq!(convert("ＡＢＣ１２３", &[FH_ASCII], None).unwrap(), "ABC123");
    }

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert("", &[FH_ASCII], None).unwrap(), "");
        assert_eq!(convert("ａ", &[], None).unwrap(), "ａ");
    }

    #[test]
    fn test_space_excluded_from_ascii_map() {
        assert_eq!(convert("Ａ\u{3000}Ｂ", &[FH_ASCII], None).unwrap(), "A\u{3000}B");
        assert_eq!(
            convert("Ａ\u{3000}Ｂ", &[FH_ASCII, Map::Pairs(FH_SPACE)], None).unwrap(),
            "A B"
        );
    }

    #[test]
    fn test_skip_by_target_character() {
        let skip = SkipSet::from("a");
        assert_eq!(
            convert("ａｂｃ", &[Map::Pairs(FH_ALPHA)], Some(&skip)).unwrap(),
            "ａbc"
        );
    }

    #[test]
    fn test_skip_by_source_character() {
        let skip = SkipSet::from("ａ");
        assert_eq!(
            convert("ａｂｃ", &[Map::Pairs(FH_ALPHA)], Some(&skip)).unwrap(),
            "ａbc"
        );
    }

    #[test]
    fn test_cascade_across_pairs() {
        let pairs: &[(&str, &str)] = &[("a", "b"), ("b", "c")];
        assert_eq!(convert("ab", &[Map::Pairs(pairs)], None).unwrap(), "cc");

        let reversed: &[(&str, &str)] = &[("b", "c"), ("a", "b")];
        assert_eq!(convert("ab", &[Map::Pairs(reversed)], None).unwrap(), "bc");
    }

    #[test]
    fn test_cascade_across_maps() {
        let out = convert("ｘ", &[Map::Pairs(FH_ALPHA), HF_ALPHA], None).unwrap();
        assert_eq!(out, "ｘ");
    }

    #[test]
    fn test_empty_source_rejected() {
        let pairs: &[(&str, &str)] = &[("a", "b"), ("", "x")];
        match convert("abc", &[Map::Pairs(pairs)], None) {
            Err(CjkNormError::MalformedMap { map, index, .. }) => {
                assert_eq!(map, "pairs");
                assert_eq!(index, 1);
            }
            other => panic!("Expected MalformedMap, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_character_source() {
        let map = CharMap::new("ellipsis", [("...", "…")]).unwrap();
        assert_eq!(convert("wait...", &[Map::from(&map)], None).unwrap(), "wait…");
    }

    #[test]
    fn test_hf_ascii_round_trip() {
        let full = convert("Hello, World!", &[HF_ASCII], None).unwrap();
        assert_eq!(full, "Ｈｅｌｌｏ， Ｗｏｒｌｄ！");
        assert_eq!(convert(&full, &[FH_ASCII], None).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_typographic_quotes_normalized() {
        assert_eq!(
            convert("’ok’ ”yes”", &[Map::Pairs(FH_PUNCTUATION)], None).unwrap(),
            "'ok' \"yes\""
        );
    }
}
