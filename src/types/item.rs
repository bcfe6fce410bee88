use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable identifier for a feed item, derived from its link.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn from_link(link: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(link.as_bytes());

        let hash = hasher.finalize();
        ItemId(hex::encode(&hash[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One syndicated entry as produced by a feed provider.
///
/// Immutable once constructed; scoped to a single pipeline run. The
/// description may still contain markup — the pipeline strips it before
/// tokenization, and fallback outcomes carry it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub link: String,
}

impl FeedItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        let link = link.into();
        FeedItem {
            id: ItemId::from_link(&link),
            title: title.into(),
            description: description.into(),
            link,
        }
    }
}
