//! Conversion maps and skip sets

use super::tables::{self, Pair};
use crate::error::{CjkNormError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};

/// One step of a conversion: an ordered list of substitutions.
#[derive(Debug, Clone, Copy)]
pub enum Map<'a> {
    /// A fixed pair list
    Pairs(&'a [(&'a str, &'a str)]),
    /// Builds its pair list on every use
    Producer(fn() -> Vec<Pair>),
    /// A validated user-defined map
    Custom(&'a CharMap),
}

/// Full-width letters, digits and punctuation to half-width.
pub const FH_ASCII: Map<'static> = Map::Producer(tables::fh_ascii);
/// Half-width digits to full-width.
pub const HF_NUM: Map<'static> = Map::Producer(tables::hf_num);
/// Half-width letters to full-width.
pub const HF_ALPHA: Map<'static> = Map::Producer(tables::hf_alpha);
/// Half-width punctuation to full-width.
pub const HF_PUNCTUATION: Map<'static> = Map::Producer(tables::hf_punctuation);
/// Half-width letters, digits and punctuation to full-width.
pub const HF_ASCII: Map<'static> = Map::Producer(tables::hf_ascii);

impl<'a> Map<'a> {
    /// Materialize the pair list for one conversion call.
    pub fn resolve(&self) -> Cow<'a, [(&'a str, &'a str)]> {
        match *self {
            Map::Pairs(pairs) => Cow::Borrowed(pairs),
            Map::Producer(produce) => Cow::Owned(produce()),
            Map::Custom(map) => Cow::Owned(
                map.pairs
                    .iter()
                    .map(|pair| (pair.from.as_str(), pair.to.as_str()))
                    .collect(),
            ),
        }
    }

    /// Name used in error messages.
    pub fn name(&self) -> &'a str {
        match *self {
            Map::Pairs(_) => "pairs",
            Map::Producer(_) => "producer",
            Map::Custom(map) => &map.name,
        }
    }
}

impl<'a> From<&'a [(&'a str, &'a str)]> for Map<'a> {
    fn from(pairs: &'a [(&'a str, &'a str)]) -> Self {
        Map::Pairs(pairs)
    }
}

impl<'a> From<&'a CharMap> for Map<'a> {
    fn from(map: &'a CharMap) -> Self {
        Map::Custom(map)
    }
}

/// A single substitution in a user-defined map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharPair {
    /// Text to replace
    pub from: String,
    /// Replacement text
    pub to: String,
}

/// A named, validated, user-defined substitution list.
///
/// Sources are non-empty and unique. Pair order is kept exactly, since
/// substitutions cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharMap {
    name: String,
    pairs: Vec<CharPair>,
}

impl CharMap {
    /// Validate and build a map.
    pub fn new<I, F, T>(name: impl Into<String>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(from, to)| CharPair {
                from: from.into(),
                to: to.into(),
            })
            .collect();
        Self::from_pairs(name.into(), pairs)
    }

    pub(crate) fn from_pairs(name: String, pairs: Vec<CharPair>) -> Result<Self> {
        let mut sources = HashSet::with_capacity(pairs.len());
        for (index, pair) in pairs.iter().enumerate() {
            if pair.from.is_empty() {
                return Err(CjkNormError::MalformedMap {
                    map: name,
                    index,
                    reason: "empty source".to_string(),
                });
            }
            if !sources.insert(pair.from.as_str()) {
                return Err(CjkNormError::MalformedMap {
                    map: name,
                    index,
                    reason: format!("duplicate source {:?}", pair.from),
                });
            }
        }
        tracing::debug!(map = %name, pairs = pairs.len(), "validated character map");
        Ok(Self { name, pairs })
    }

    /// Map name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pairs in application order
    pub fn pairs(&self) -> &[CharPair] {
        &self.pairs
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the map has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Characters to leave untouched during one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    chars: BTreeSet<char>,
}

impl SkipSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of one-character strings.
    ///
    /// Fails with `InvalidArgument` if any item is empty or longer than one character.
    pub fn try_from_items<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = BTreeSet::new();
        for item in items {
            let item = item.as_ref();
            let mut it = item.chars();
            match (it.next(), it.next()) {
                (Some(ch), None) => {
                    chars.insert(ch);
                }
                _ => {
                    return Err(CjkNormError::InvalidArgument {
                        reason: format!("skip item {item:?} is not a single character"),
                    })
                }
            }
        }
        Ok(Self { chars })
    }

    /// Whether `ch` is skipped
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Whether `text` is exactly one skipped character
    pub fn contains_str(&self, text: &str) -> bool {
        let mut it = text.chars();
        match (it.next(), it.next()) {
            (Some(ch), None) => self.contains(ch),
            _ => false,
        }
    }

    /// Whether a pair touches a skipped character on either side.
    pub fn skips_pair(&self, from: &str, to: &str) -> bool {
        self.contains_str(from) || self.contains_str(to)
    }

    /// Number of skipped characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether nothing is skipped
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for SkipSet {
    /// Every character of the string is skipped.
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl FromIterator<char> for SkipSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
