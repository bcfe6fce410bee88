pub mod frequency;
pub mod latent;

use std::collections::BTreeMap;

use crate::nlp::TokenizedDocument;

pub use frequency::FrequencyScorer;
pub use latent::{DecompositionError, LatentScorer};

/// Sentence index → non-negative score.
///
/// Keys are a subset of `0..document.len()`. A `BTreeMap` keeps every
/// observable iteration deterministic.
pub type ScoreMap = BTreeMap<usize, f64>;

/// An interchangeable strategy for ranking the sentences of one document.
///
/// Implementations are pure functions of the document and their own
/// configuration; no cross-call state, no suspension points.
pub trait SentenceScorer {
    fn score(&self, document: &TokenizedDocument) -> ScoreMap;
}
