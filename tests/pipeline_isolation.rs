use std::collections::HashMap;

use async_trait::async_trait;
use feedbrief::feed::{FeedProvider, FetchError};
use feedbrief::filter::TopicSet;
use feedbrief::nlp::LanguageProfile;
use feedbrief::pipeline::{parse_source_list, FeedPipeline, PipelineConfig, ScorerChoice};
use feedbrief::types::{FeedItem, Outcome, SourceOutcome};

/// Provider backed by a fixed map; URLs absent from the map fail to fetch.
struct MockProvider {
    feeds: HashMap<String, Vec<FeedItem>>,
}

impl MockProvider {
    fn new(feeds: &[(&str, Vec<FeedItem>)]) -> Self {
        Self {
            feeds: feeds
                .iter()
                .map(|(url, items)| (url.to_string(), items.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl FeedProvider for MockProvider {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, FetchError> {
        self.feeds.get(url).cloned().ok_or(FetchError::Parse {
            url: url.to_string(),
        })
    }
}

fn item(title: &str, description: &str) -> FeedItem {
    FeedItem::new(title, description, format!("https://example.com/{title}"))
}

fn config() -> PipelineConfig {
    PipelineConfig {
        keywords: TopicSet::from_comma_separated("technology, science"),
        scorer: ScorerChoice::Frequency,
        sentence_count: 1,
        language: LanguageProfile::from_stopwords(["are", "and", "the", "a"]),
        ..PipelineConfig::default()
    }
}

#[tokio::test]
async fn failed_source_does_not_affect_later_sources() {
    let provider = MockProvider::new(&[(
        "https://good.example/rss",
        vec![
            item("Technology wins", "Chips are fast. Chips are everywhere."),
            item("Science news", "Cells divide. Cells divide again and again."),
        ],
    )]);
    let pipeline = FeedPipeline::new(provider, config());

    let sources = vec![
        "https://dead.example/rss".to_string(),
        "https://good.example/rss".to_string(),
    ];
    let result = pipeline.run(&sources).await;

    // Source order is preserved; the failure is contained in slot 0.
    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[0].source, "https://dead.example/rss");
    assert!(matches!(
        result.sources[0].outcome,
        SourceOutcome::FetchFailed { .. }
    ));

    let SourceOutcome::Items { items } = &result.sources[1].outcome else {
        panic!("second source must have item reports");
    };
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item.title, "Technology wins");
    assert_eq!(items[1].item.title, "Science news");
    assert!(matches!(items[0].outcome, Outcome::Summary(_)));
    assert!(matches!(items[1].outcome, Outcome::Summary(_)));

    assert_eq!(result.run.sources_failed, 1);
    assert_eq!(result.run.sources_fetched, 1);
    assert_eq!(result.run.items_summarized, 2);
}

#[tokio::test]
async fn unmatched_titles_are_skipped_not_summarized() {
    let provider = MockProvider::new(&[(
        "https://news.example/rss",
        vec![
            item("Technology report", "Robots weld. Robots weld quickly."),
            item("Sports roundup", "Team wins. Team celebrates."),
        ],
    )]);
    let pipeline = FeedPipeline::new(provider, config());

    let result = pipeline
        .run(&["https://news.example/rss".to_string()])
        .await;

    let SourceOutcome::Items { items } = &result.sources[0].outcome else {
        panic!("expected item reports");
    };
    assert!(matches!(items[0].outcome, Outcome::Summary(_)));
    assert!(matches!(items[1].outcome, Outcome::Skipped));

    assert_eq!(result.run.items_considered, 2);
    assert_eq!(result.run.items_skipped, 1);
    assert_eq!(result.run.items_summarized, 1);
    assert_eq!(result.run.items_fallback, 0);
}

#[tokio::test]
async fn empty_description_falls_back_to_the_raw_item() {
    let provider = MockProvider::new(&[(
        "https://news.example/rss",
        vec![item("Technology note", "   ")],
    )]);
    let pipeline = FeedPipeline::new(provider, config());

    let result = pipeline
        .run(&["https://news.example/rss".to_string()])
        .await;

    let SourceOutcome::Items { items } = &result.sources[0].outcome else {
        panic!("expected item reports");
    };
    let Outcome::FallbackRaw {
        description,
        reason,
    } = &items[0].outcome
    else {
        panic!("empty description must fall back");
    };
    assert_eq!(description, "   ");
    assert!(!reason.is_empty());
    assert_eq!(result.run.items_fallback, 1);
}

#[tokio::test]
async fn markup_is_stripped_before_summarization() {
    let provider = MockProvider::new(&[(
        "https://news.example/rss",
        vec![item(
            "Technology briefing",
            "<p>Engines roar. <b>Engines</b> roar &amp; hum. Birds sing.</p>",
        )],
    )]);
    let pipeline = FeedPipeline::new(provider, config());

    let result = pipeline
        .run(&["https://news.example/rss".to_string()])
        .await;

    let SourceOutcome::Items { items } = &result.sources[0].outcome else {
        panic!("expected item reports");
    };
    let Outcome::Summary(summary) = &items[0].outcome else {
        panic!("markup-bearing description must still summarize");
    };
    assert!(!summary.text.contains('<'));
    assert_eq!(summary.sentence_indices, vec![1]);
    assert_eq!(summary.text, "Engines roar & hum.");
}

#[tokio::test]
async fn latent_choice_summarizes_end_to_end() {
    let provider = MockProvider::new(&[(
        "https://news.example/rss",
        vec![item(
            "Technology outlook",
            "Chips shrink yearly. Chips power phones. Rain is expected.",
        )],
    )]);
    let pipeline = FeedPipeline::new(
        provider,
        PipelineConfig {
            scorer: ScorerChoice::Latent,
            ..config()
        },
    );

    let result = pipeline
        .run(&["https://news.example/rss".to_string()])
        .await;

    let SourceOutcome::Items { items } = &result.sources[0].outcome else {
        panic!("expected item reports");
    };
    let Outcome::Summary(summary) = &items[0].outcome else {
        panic!("expected a summary outcome");
    };
    assert_eq!(summary.sentence_indices.len(), 1);
    assert!(!summary.text.is_empty());
}

#[tokio::test]
async fn counters_partition_the_considered_items() {
    let provider = MockProvider::new(&[(
        "https://news.example/rss",
        vec![
            item("Technology one", "Solid text. More solid text."),
            item("Unrelated", "Ignored text."),
            item("Technology two", ""),
        ],
    )]);
    let pipeline = FeedPipeline::new(provider, config());

    let result = pipeline
        .run(&["https://news.example/rss".to_string()])
        .await;

    let run = &result.run;
    assert_eq!(run.items_considered, 3);
    assert_eq!(
        run.items_considered,
        run.items_skipped + run.items_summarized + run.items_fallback
    );
}

#[test]
fn source_list_parsing_trims_and_drops_blank_lines() {
    let parsed = parse_source_list(
        "http://feeds.example/news.xml\n  \nhttp://feeds.example/world.xml  \n",
    );

    assert_eq!(
        parsed,
        vec![
            "http://feeds.example/news.xml".to_string(),
            "http://feeds.example/world.xml".to_string(),
        ]
    );
}
