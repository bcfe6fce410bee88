//! Feed retrieval: the provider seam and the RSS/Atom implementation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::types::FeedItem;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("{url} is neither parseable RSS nor Atom")]
    Parse { url: String },
}

/// Source of feed items. Fetching is the only suspending operation in the
/// pipeline; everything downstream is pure CPU work.
#[async_trait]
pub trait FeedProvider {
    /// Fetch the items of one feed, in feed order.
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, FetchError>;
}

/// Configuration for [`RssFeedProvider`].
#[derive(Debug, Clone)]
pub struct RssProviderConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Disables TLS certificate validation for feed requests. Off by
    /// default; enable only for explicitly trusted internal feeds.
    pub danger_accept_invalid_certs: bool,
}

impl Default for RssProviderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("feedbrief/", env!("CARGO_PKG_VERSION")).to_string(),
            danger_accept_invalid_certs: false,
        }
    }
}

/// Fetches RSS 2.0 and Atom feeds over HTTP.
#[derive(Debug, Clone)]
pub struct RssFeedProvider {
    client: reqwest::Client,
}

impl RssFeedProvider {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(RssProviderConfig::default())
    }

    pub fn with_config(config: RssProviderConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()?;
        Ok(Self { client })
    }

    /// Try RSS first, then Atom, as feeds rarely label themselves.
    fn parse_items(url: &str, body: &[u8]) -> Result<Vec<FeedItem>, FetchError> {
        if let Ok(channel) = rss::Channel::read_from(body) {
            let items = channel
                .items()
                .iter()
                .map(|item| {
                    FeedItem::new(
                        item.title().unwrap_or_default(),
                        item.description().unwrap_or_default(),
                        item.link().unwrap_or_default(),
                    )
                })
                .collect();
            return Ok(items);
        }

        if let Ok(feed) = atom_syndication::Feed::read_from(body) {
            let items = feed
                .entries()
                .iter()
                .map(|entry| {
                    let link = entry
                        .links()
                        .first()
                        .map(|l| l.href().to_string())
                        .unwrap_or_default();
                    let description = entry
                        .summary()
                        .map(|s| s.value.clone())
                        .or_else(|| entry.content().and_then(|c| c.value().map(str::to_string)))
                        .unwrap_or_default();
                    FeedItem::new(entry.title().value.clone(), description, link)
                })
                .collect();
            return Ok(items);
        }

        Err(FetchError::Parse {
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl FeedProvider for RssFeedProvider {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let items = Self::parse_items(url, &body)?;
        debug!(url, items = items.len(), "fetched feed");
        Ok(items)
    }
}

/// Drop markup from a feed description, decoding the common entities and
/// collapsing whitespace.
pub fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
