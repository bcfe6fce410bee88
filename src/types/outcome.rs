use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::item::FeedItem;

/// Terminal artifact of one document's summarization.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryResult {
    pub text: String,
    /// Original-order sentence indices, strictly ascending.
    pub sentence_indices: Vec<usize>,
}

/// Per-item outcome. Failures are values collected by the coordinator;
/// no unwinding crosses an item boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The item was summarized.
    Summary(SummaryResult),
    /// Summarization failed; the raw description stands in for the summary.
    FallbackRaw { description: String, reason: String },
    /// The topic filter rejected the item's title.
    Skipped,
}

/// A fetched item paired with what the pipeline made of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    pub item: FeedItem,
    pub outcome: Outcome,
}

/// Per-source outcome: either the ordered item reports, or a source-level
/// fetch failure that did not stop the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceOutcome {
    Items { items: Vec<ItemReport> },
    FetchFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    pub outcome: SourceOutcome,
}

/// Metadata describing the outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Informational only; never part of a determinism contract.
    pub generated_at: DateTime<Utc>,

    pub sources_fetched: usize,
    pub sources_failed: usize,

    pub items_considered: usize,
    pub items_skipped: usize,
    pub items_summarized: usize,
    pub items_fallback: usize,
}

/// The final result of one pipeline run. Source order and, within each
/// source, item order match the input and feed order exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub sources: Vec<SourceReport>,
    pub run: RunMetadata,
}
