use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Normalized keyword set deciding which incoming items are worth
/// summarizing.
///
/// Matching is a case-insensitive substring test against the item title.
/// An empty set matches nothing: the filter is an allow-list, and an empty
/// allow-list must not silently admit every item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicSet {
    keywords: BTreeSet<String>,
}

impl TopicSet {
    /// Build a set from raw keywords; each is trimmed and lowercased,
    /// empties dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Parse the comma-delimited configuration string
    /// (e.g. `"technology, science, health"`).
    pub fn from_comma_separated(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn matches(&self, title: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let title = title.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| title.contains(keyword.as_str()))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
