//! Canonical full-width/half-width pair tables
//!
//! The full-to-half tables are the source of truth. Half-to-full tables are
//! derived by swapping each pair; when several full-width forms share one
//! half-width character, the first listed form wins the reverse direction.
//! For punctuation that first form is always the one in U+FF01..U+FF5E, with
//! the typographic variants common in CJK text listed after it.

/// A `(from, to)` substitution.
pub type Pair = (&'static str, &'static str);

/// Ideographic space.
pub const FH_SPACE: &[Pair] = &[("\u{3000}", " ")];

/// Full-width digits.
#[rustfmt::skip]
pub const FH_NUM: &[Pair] = &[
    ("０", "0"), ("１", "1"), ("２", "2"), ("３", "3"), ("４", "4"),
    ("５", "5"), ("６", "6"), ("７", "7"), ("８", "8"), ("９", "9"),
];

/// Full-width Latin letters, lower case first.
#[rustfmt::skip]
pub const FH_ALPHA: &[Pair] = &[
    ("ａ", "a"), ("ｂ", "b"), ("ｃ", "c"), ("ｄ", "d"), ("ｅ", "e"),
    ("ｆ", "f"), ("ｇ", "g"), ("ｈ", "h"), ("ｉ", "i"), ("ｊ", "j"),
    ("ｋ", "k"), ("ｌ", "l"), ("ｍ", "m"), ("ｎ", "n"), ("ｏ", "o"),
    ("ｐ", "p"), ("ｑ", "q"), ("ｒ", "r"), ("ｓ", "s"), ("ｔ", "t"),
    ("ｕ", "u"), ("ｖ", "v"), ("ｗ", "w"), ("ｘ", "x"), ("ｙ", "y"),
    ("ｚ", "z"),
    ("Ａ", "A"), ("Ｂ", "B"), ("Ｃ", "C"), ("Ｄ", "D"), ("Ｅ", "E"),
    ("Ｆ", "F"), ("Ｇ", "G"), ("Ｈ", "H"), ("Ｉ", "I"), ("Ｊ", "J"),
    ("Ｋ", "K"), ("Ｌ", "L"), ("Ｍ", "M"), ("Ｎ", "N"), ("Ｏ", "O"),
    ("Ｐ", "P"), ("Ｑ", "Q"), ("Ｒ", "R"), ("Ｓ", "S"), ("Ｔ", "T"),
    ("Ｕ", "U"), ("Ｖ", "V"), ("Ｗ", "W"), ("Ｘ", "X"), ("Ｙ", "Y"),
    ("Ｚ", "Z"),
];

/// Full-width and typographic punctuation.
#[rustfmt::skip]
pub const FH_PUNCTUATION: &[Pair] = &[
    ("．", "."), ("，", ","), ("！", "!"), ("？", "?"),
    ("＂", "\""), ("”", "\""),
    ("＇", "'"), ("’", "'"),
    ("｀", "`"), ("‘", "`"),
    ("＠", "@"), ("＿", "_"), ("：", ":"), ("；", ";"), ("＃", "#"),
    ("＄", "$"), ("％", "%"), ("＆", "&"), ("（", "("), ("）", ")"),
    ("－", "-"), ("‐", "-"),
    ("＝", "="), ("＊", "*"), ("＋", "+"), ("／", "/"), ("＜", "<"),
    ("＞", ">"), ("［", "["),
    ("＼", "\\"), ("￥", "\\"),
    ("］", "]"), ("＾", "^"), ("｛", "{"), ("｜", "|"), ("｝", "}"),
    ("～", "~"),
];

/// Half-width space to ideographic space.
pub const HF_SPACE: &[Pair] = &[(" ", "\u{3000}")];

/// Letters, digits and punctuation, full to half.
pub fn fh_ascii() -> Vec<Pair> {
    FH_ALPHA
        .iter()
        .chain(FH_NUM)
        .chain(FH_PUNCTUATION)
        .copied()
        .collect()
}

/// Half-width digits to full-width.
pub fn hf_num() -> Vec<Pair> {
    reverse(FH_NUM)
}

/// Half-width letters to full-width.
pub fn hf_alpha() -> Vec<Pair> {
    reverse(FH_ALPHA)
}

/// Half-width punctuation to full-width.
pub fn hf_punctuation() -> Vec<Pair> {
    reverse(FH_PUNCTUATION)
}

/// Letters, digits and punctuation, half to full.
pub fn hf_ascii() -> Vec<Pair> {
    reverse(&fh_ascii())
}

/// Swap every pair, keeping only the first pair for each new source.
///
/// Later duplicates could never fire during a cascade anyway: once the first
/// pair has run, no occurrence of the shared source is left.
fn reverse(pairs: &[Pair]) -> Vec<Pair> {
    let mut reversed: Vec<Pair> = Vec::with_capacity(pairs.len());
    for &(full, half) in pairs {
        if !reversed.iter().any(|&(from, _)| from == half) {
            reversed.push((half, full));
        }
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_sources(pairs: &[Pair]) {
        let mut seen = HashSet::new();
        for (from, _) in pairs {
            assert!(seen.insert(*from), "duplicate source {from:?}");
        }
    }

    #[test]
    fn test_tables_have_unique_sources() {
        assert_unique_sources(FH_SPACE);
        assert_unique_sources(FH_NUM);
        assert_unique_sources(FH_ALPHA);
        assert_unique_sources(FH_PUNCTUATION);
        assert_unique_sources(&fh_ascii());
        assert_unique_sources(&hf_ascii());
        assert_unique_sources(&hf_punctuation());
    }

    #[test]
    fn test_every_pair_is_single_characters() {
        for (from, to) in fh_ascii().into_iter().chain(FH_SPACE.iter().copied()) {
            assert_eq!(from.chars().count(), 1, "{from:?}");
            assert_eq!(to.chars().count(), 1, "{to:?}");
        }
    }

    #[test]
    fn test_ascii_table_covers_printable_ascii() {
        let halves: HashSet<char> = fh_ascii()
            .iter()
            .filter_map(|(_, to)| to.chars().next())
            .collect();
        for code in 0x21u8..=0x7e {
            assert!(halves.contains(&char::from(code)), "missing {code:#x}");
        }
        assert_eq!(halves.len(), 94);
    }

    #[test]
    fn test_fh_ascii_order() {
        let ascii = fh_ascii();
        assert_eq!(ascii.len(), FH_ALPHA.len() + FH_NUM.len() + FH_PUNCTUATION.len());
        assert_eq!(ascii[0], ("ａ", "a"));
        assert_eq!(ascii[52], ("０", "0"));
        assert_eq!(ascii[62], ("．", "."));
    }

    #[test]
    fn test_reverse_prefers_first_form() {
        let reversed = hf_punctuation();
        let lookup = |half: &str| reversed.iter().find(|(from, _)| *from == half).map(|p| p.1);
        assert_eq!(lookup("\""), Some("＂"));
        assert_eq!(lookup("-"), Some("－"));
        assert_eq!(lookup("\\"), Some("＼"));
        assert_eq!(reversed.len(), 32);
    }

    #[test]
    fn test_hf_num_swaps_pairs() {
        assert_eq!(hf_num()[0], ("0", "０"));
        assert_eq!(hf_alpha()[26], ("A", "Ａ"));
        assert_eq!(hf_ascii().len(), 94);
    }
}
