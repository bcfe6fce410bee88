use std::collections::BTreeMap;

use crate::nlp::{LanguageProfile, TokenizedDocument};
use crate::scoring::{ScoreMap, SentenceScorer};

/// Ranks sentences by cumulative non-stopword term frequency.
#[derive(Debug, Clone, Default)]
pub struct FrequencyScorer {
    profile: LanguageProfile,
}

impl FrequencyScorer {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }

    /// Occurrence counts over all non-stopword tokens in the document,
    /// built once per scoring call.
    pub fn frequency_table(&self, document: &TokenizedDocument) -> BTreeMap<String, usize> {
        let mut table = BTreeMap::new();
        for sentence in document.sentences() {
            for word in &sentence.words {
                if !self.profile.is_stopword(word) {
                    *table.entry(word.clone()).or_insert(0) += 1;
                }
            }
        }
        table
    }
}

impl SentenceScorer for FrequencyScorer {
    fn score(&self, document: &TokenizedDocument) -> ScoreMap {
        let table = self.frequency_table(document);

        let mut scores = ScoreMap::new();
        for sentence in document.sentences() {
            // Stopwords are walked too; absent from the table, they add 0.
            let total: usize = sentence
                .words
                .iter()
                .map(|word| table.get(word).copied().unwrap_or(0))
                .sum();
            scores.insert(sentence.index, total as f64);
        }
        scores
    }
}
