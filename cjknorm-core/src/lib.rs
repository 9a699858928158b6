//! Text normalization for mixed Chinese, Japanese and English text
//!
//! This crate provides two independent, stateless utilities:
//!
//! - **Sentence splitting**: text is cut after Western and CJK terminator
//!   punctuation, keeping each terminator with its sentence.
//! - **Width conversion**: full-width and half-width forms of space, digits,
//!   Latin letters and punctuation are converted through ordered pair
//!   tables, or directly by codepoint arithmetic.
//!
//! All tables and the default delimiter pattern are immutable and shared,
//! so every function can be called from any thread.
//!
//! # Example
//!
//! ```rust
//! use cjknorm_core::{convert, split_sentences, str_half2full, FH_ASCII};
//!
//! let sentences: Vec<&str> = split_sentences("Hello world. How are you?").collect();
//! assert_eq!(sentences, vec!["Hello world.", "How are you?"]);
//!
//! assert_eq!(convert("ＡＢＣ１２３", &[FH_ASCII], None).unwrap(), "ABC123");
//! assert_eq!(str_half2full("AB 12"), "ＡＢ　１２");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod splitter;
pub mod width;

pub use error::{CjkNormError, Result};
pub use splitter::{split_sentences, DelimiterSet, SentenceSplitter, Sentences};
pub use width::{
    convert, str_full2half, str_half2full, CharMap, CharPair, Map, SkipSet, FH_ALPHA, FH_ASCII,
    FH_NUM, FH_PUNCTUATION, FH_SPACE, HF_ALPHA, HF_ASCII, HF_NUM, HF_PUNCTUATION, HF_SPACE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilities_are_independent() {
        // Converting first changes what the splitter sees.
        let text = "ＯＫ！ｎｅｘｔ";
        let converted = convert(text, &[FH_ASCII], None).unwrap();
        assert_eq!(converted, "OK!next");
        assert_eq!(split_sentences(&converted).collect::<Vec<_>>(), vec!["OK!", "next"]);
        assert_eq!(split_sentences(text).collect::<Vec<_>>(), vec!["ＯＫ！", "ｎｅｘｔ"]);
    }

    #[test]
    fn test_shared_state_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = format!("第{i}句。Ｎｏ．{i}");
                    let sentences: Vec<String> =
                        split_sentences(&text).map(str::to_string).collect();
                    let converted = convert(&text, &[FH_ASCII], None).unwrap();
                    (sentences, converted)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (sentences, converted) = handle.join().unwrap();
            assert_eq!(sentences, vec![format!("第{i}句。"), format!("Ｎｏ．{i}")]);
            assert_eq!(converted, format!("第{i}句。No.{i}"));
        }
    }
}
