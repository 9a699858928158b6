//! Punctuation-driven sentence splitting
//!
//! Text is cut after every terminator marker. Each sentence keeps its
//! trailing marker and is trimmed of surrounding whitespace. Sentences are
//! produced lazily as slices of the input.

pub mod delimiters;

use crate::error::Result;
use regex::{Matches, Regex};
use std::iter::FusedIterator;
use std::sync::OnceLock;

pub use delimiters::DelimiterSet;

static DEFAULT_SPLITTER: OnceLock<SentenceSplitter> = OnceLock::new();

/// Splits text with a compiled delimiter alternation.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    pattern: Regex,
}

impl SentenceSplitter {
    /// Compile a splitter for the given delimiter set.
    pub fn new(delimiters: DelimiterSet) -> Result<Self> {
        delimiters.validate()?;
        for (shadowed, by) in delimiters.shadowed_markers() {
            tracing::warn!(
                marker = shadowed,
                prefix = by,
                "delimiter marker can never match; an earlier marker is its prefix"
            );
        }

        let source = delimiters.pattern();
        let pattern = Regex::new(&source)?;
        tracing::debug!(
            markers = delimiters.markers().count(),
            pattern = %source,
            "compiled sentence delimiter pattern"
        );

        Ok(Self { pattern })
    }

    /// Split `text` into sentences.
    pub fn split<'r, 't>(&'r self, text: &'t str) -> Sentences<'r, 't> {
        Sentences {
            text,
            matches: self.pattern.find_iter(text),
            start: 0,
            done: false,
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(DelimiterSet::default()).expect("built-in delimiter set must compile")
    }
}

/// Split `text` into sentences with the built-in delimiter set.
///
/// ```
/// use cjknorm_core::split_sentences;
///
/// let sentences: Vec<&str> = split_sentences("你好。今天天气不错！").collect();
/// assert_eq!(sentences, vec!["你好。", "今天天气不错！"]);
/// ```
pub fn split_sentences(text: &str) -> Sentences<'static, '_> {
    DEFAULT_SPLITTER
        .get_or_init(SentenceSplitter::default)
        .split(text)
}

/// Lazy, single-pass sequence of sentences.
///
/// Adjacent delimiters or whitespace-only runs between delimiters yield
/// empty sentences.
#[derive(Debug)]
pub struct Sentences<'r, 't> {
    text: &'t str,
    matches: Matches<'r, 't>,
    start: usize,
    done: bool,
}

impl<'t> Iterator for Sentences<'_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(delimiter) = self.matches.next() {
            let sentence = &self.text[self.start..delimiter.end()];
            self.start = delimiter.end();
            return Some(sentence.trim());
        }

        self.done = true;
        let rest = &self.text[self.start..];
        if rest.is_empty() {
            None
        } else {
            Some(rest.trim())
        }
    }
}

impl FusedIterator for Sentences<'_, '_> {}
