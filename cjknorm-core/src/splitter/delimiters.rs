//! Sentence terminator markers

use crate::error::{CjkNormError, Result};
use serde::{Deserialize, Serialize};

/// Western terminators: line breaks, `?!`, `!`, `?` and a period followed by one space.
pub const WESTERN_TERMINATORS: &[&str] = &["\r", "\n", "?!", "!", "?", ". "];

/// CJK terminators closed by a curly quote.
pub const CJK_THREE_MARKER: &[&str] = &["？！”", "。’”", "！’”", "……”"];

/// Two-character CJK terminators.
pub const CJK_TWO_MARKER: &[&str] = &["。”", "！”", "？”", "；”", "？！", "……"];

/// Single-character CJK terminators, including the halfwidth ideographic full stop.
pub const CJK_ONE_MARKER: &[&str] = &["！", "？", "｡", "。"];

/// Ordered tiers of terminator markers.
///
/// Tiers are flattened in declaration order into one alternation, so a marker
/// that is a prefix of a later one will shadow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterSet {
    /// Western sentence enders
    #[serde(default)]
    pub western: Vec<String>,
    /// Three-character CJK combinations
    #[serde(default)]
    pub three_marker: Vec<String>,
    /// Two-character CJK combinations
    #[serde(default)]
    pub two_marker: Vec<String>,
    /// Single-character CJK enders
    #[serde(default)]
    pub one_marker: Vec<String>,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        let owned = |markers: &[&str]| markers.iter().map(|m| m.to_string()).collect();
        Self {
            western: owned(WESTERN_TERMINATORS),
            three_marker: owned(CJK_THREE_MARKER),
            two_marker: owned(CJK_TWO_MARKER),
            one_marker: owned(CJK_ONE_MARKER),
        }
    }
}

impl DelimiterSet {
    /// All markers in alternation order.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.western
            .iter()
            .chain(&self.three_marker)
            .chain(&self.two_marker)
            .chain(&self.one_marker)
            .map(String::as_str)
    }

    /// Reject sets the splitter cannot use.
    ///
    /// An empty marker would match at every position, and a set with no
    /// markers at all has nothing to split on.
    pub fn validate(&self) -> Result<()> {
        let mut count = 0;
        for (index, marker) in self.markers().enumerate() {
            if marker.is_empty() {
                return Err(CjkNormError::MalformedPattern {
                    reason: format!("marker {index} is empty"),
                });
            }
            count += 1;
        }
        if count == 0 {
            return Err(CjkNormError::MalformedPattern {
                reason: "delimiter set has no markers".to_string(),
            });
        }
        Ok(())
    }

    /// Markers that can never match because an earlier marker is their prefix.
    ///
    /// Returns `(shadowed, shadowing)` pairs.
    pub fn shadowed_markers(&self) -> Vec<(&str, &str)> {
        let markers: Vec<&str> = self.markers().collect();
        let mut shadowed = Vec::new();
        for (i, later) in markers.iter().enumerate() {
            if let Some(earlier) = markers[..i]
                .iter()
                .find(|earlier| !earlier.is_empty() && later.starts_with(**earlier))
            {
                shadowed.push((*later, *earlier));
            }
        }
        shadowed
    }

    /// Build the capturing alternation, escaping every marker.
    pub(crate) fn pattern(&self) -> String {
        let alternatives: Vec<String> = self.markers().map(regex::escape).collect();
        format!("({})", alternatives.join("|"))
    }
}
