//! TOML configuration for delimiter sets and character maps
//!
//! A delimiter set lists its marker tiers; missing tiers are empty:
//!
//! ```toml
//! western = ["\n", "!", "?", ". "]
//! one_marker = ["。"]
//! ```
//!
//! A character map has a name and an ordered array of pairs:
//!
//! ```toml
//! name = "brackets"
//!
//! [[pairs]]
//! from = "【"
//! to = "["
//! ```

use crate::error::Result;
use crate::splitter::DelimiterSet;
use crate::width::{CharMap, CharPair};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CharMapConfig {
    name: String,
    #[serde(default)]
    pairs: Vec<CharPair>,
}

impl DelimiterSet {
    /// Parse a delimiter set from TOML and validate it.
    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let set: DelimiterSet = toml::from_str(toml_content)?;
        set.validate()?;
        Ok(set)
    }

    /// Read a delimiter set from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading delimiter set");
        Self::from_toml(&content)
    }
}

impl CharMap {
    /// Parse a character map from TOML and validate it.
    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let config: CharMapConfig = toml::from_str(toml_content)?;
        CharMap::from_pairs(config.name, config.pairs)
    }

    /// Read a character map from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading character map");
        Self::from_toml(&content)
    }
}
