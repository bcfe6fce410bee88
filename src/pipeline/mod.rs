pub mod scheduler;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::feed::{strip_html, FeedProvider};
use crate::filter::TopicSet;
use crate::nlp::{tokenize, LanguageProfile};
use crate::scoring::{FrequencyScorer, LatentScorer, SentenceScorer};
use crate::summary::select;
use crate::types::{
    ItemReport, Outcome, RunMetadata, RunResult, SourceOutcome, SourceReport,
};

pub use scheduler::{run_on_interval, DEFAULT_REFRESH_PERIOD};

pub const DEFAULT_SENTENCE_COUNT: usize = 3;
pub const DEFAULT_MAX_SENTENCES: usize = 64;

/// Which scoring strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerChoice {
    Frequency,
    #[default]
    Latent,
}

/// Run-wide configuration, parsed before entering the core and constant
/// for the duration of a run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub keywords: TopicSet,
    pub scorer: ScorerChoice,
    /// Sentences per summary.
    pub sentence_count: usize,
    /// Cap on sentences per item before scoring; bounds worst-case
    /// decomposition cost.
    pub max_sentences: usize,
    pub language: LanguageProfile,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            keywords: TopicSet::default(),
            scorer: ScorerChoice::default(),
            sentence_count: DEFAULT_SENTENCE_COUNT,
            max_sentences: DEFAULT_MAX_SENTENCES,
            language: LanguageProfile::english(),
        }
    }
}

/// Orchestrates one self-contained run: per source, fetch → filter →
/// summarize.
///
/// Failures never cross their boundary. A failing source is reported
/// alongside the successful ones, a failing item falls back to its raw
/// description, and the run itself cannot fail.
pub struct FeedPipeline<P> {
    provider: P,
    config: PipelineConfig,
    scorer: Box<dyn SentenceScorer + Send + Sync>,
}

impl<P> FeedPipeline<P>
where
    P: FeedProvider + Sync,
{
    pub fn new(provider: P, config: PipelineConfig) -> Self {
        let scorer: Box<dyn SentenceScorer + Send + Sync> = match config.scorer {
            ScorerChoice::Frequency => Box::new(FrequencyScorer::new(config.language.clone())),
            ScorerChoice::Latent => Box::new(LatentScorer::new(config.language.clone())),
        };
        Self {
            provider,
            config,
            scorer,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Execute one run over `sources`.
    ///
    /// The output preserves source order and, within each source, feed
    /// order; this ordering is the coordinator's primary contract.
    pub async fn run(&self, sources: &[String]) -> RunResult {
        let mut run = RunMetadata {
            generated_at: Utc::now(),
            sources_fetched: 0,
            sources_failed: 0,
            items_considered: 0,
            items_skipped: 0,
            items_summarized: 0,
            items_fallback: 0,
        };

        let mut reports = Vec::with_capacity(sources.len());
        for source in sources {
            match self.provider.fetch(source).await {
                Err(err) => {
                    warn!(source, error = %err, "source fetch failed, continuing");
                    run.sources_failed += 1;
                    reports.push(SourceReport {
                        source: source.clone(),
                        outcome: SourceOutcome::FetchFailed {
                            reason: err.to_string(),
                        },
                    });
                }
                Ok(items) => {
                    run.sources_fetched += 1;
                    let mut item_reports = Vec::with_capacity(items.len());
                    for item in items {
                        run.items_considered += 1;
                        let outcome = if !self.config.keywords.matches(&item.title) {
                            run.items_skipped += 1;
                            Outcome::Skipped
                        } else {
                            let outcome = self.summarize_item(&item.description);
                            match outcome {
                                Outcome::Summary(_) => run.items_summarized += 1,
                                _ => run.items_fallback += 1,
                            }
                            outcome
                        };
                        item_reports.push(ItemReport { item, outcome });
                    }
                    reports.push(SourceReport {
                        source: source.clone(),
                        outcome: SourceOutcome::Items {
                            items: item_reports,
                        },
                    });
                }
            }
        }

        info!(
            sources = sources.len(),
            failed = run.sources_failed,
            items = run.items_considered,
            "pipeline run complete"
        );
        RunResult {
            sources: reports,
            run,
        }
    }

    /// Summarize one description, mapping every failure to a fallback
    /// outcome carrying the untouched original text.
    fn summarize_item(&self, description: &str) -> Outcome {
        let plain = strip_html(description);
        let mut document = match tokenize(&plain, &self.config.language) {
            Ok(document) => document,
            Err(err) => {
                return Outcome::FallbackRaw {
                    description: description.to_string(),
                    reason: err.to_string(),
                }
            }
        };
        document.truncate(self.config.max_sentences);

        let scores = self.scorer.score(&document);
        Outcome::Summary(select(&document, &scores, self.config.sentence_count))
    }
}

/// Parse the newline-delimited source-URL configuration block: one URL per
/// line, trimmed, empty lines dropped, order preserved.
pub fn parse_source_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
