use std::collections::BTreeMap;

use nalgebra::DMatrix;
use thiserror::Error;
use tracing::warn;

use crate::nlp::{LanguageProfile, TokenizedDocument};
use crate::scoring::{FrequencyScorer, ScoreMap, SentenceScorer};

/// Why a decomposition could not be used. Recovered inside the scorer by
/// delegating to frequency scoring; never surfaced to callers.
#[derive(Debug, Error)]
pub enum DecompositionError {
    #[error("document has no non-stopword vocabulary")]
    EmptyVocabulary,
    #[error("singular value decomposition did not converge")]
    DidNotConverge,
}

const DEFAULT_RANK: usize = 3;
const SVD_EPSILON: f64 = 1.0e-12;
const SVD_MAX_ITERATIONS: usize = 250;

/// Ranks sentences by their weight in the dominant latent topics of a
/// term×sentence matrix.
///
/// The weighting is fixed so score maps are reproducible across runs: raw
/// term frequency over the non-stopword vocabulary, vocabulary rows in
/// lexicographic order, and sentence score
/// `sqrt(Σ_{i<r} (σ_i · vᵗ[i, j])²)` over the top `r` singular components
/// (`r` clamped to the matrix's smaller dimension). Only magnitudes enter
/// the score: the sign of each singular component is arbitrary and must
/// not affect ranking.
#[derive(Debug, Clone)]
pub struct LatentScorer {
    profile: LanguageProfile,
    rank: usize,
    fallback: FrequencyScorer,
}

impl Default for LatentScorer {
    fn default() -> Self {
        Self::new(LanguageProfile::default())
    }
}

impl LatentScorer {
    pub fn new(profile: LanguageProfile) -> Self {
        let fallback = FrequencyScorer::new(profile.clone());
        Self {
            profile,
            rank: DEFAULT_RANK,
            fallback,
        }
    }

    /// Number of singular components to retain. Values below 1 are raised
    /// to 1; the effective rank is clamped again at scoring time.
    pub fn with_rank(mut self, rank: usize) -> Self {
        self.rank = rank.max(1);
        self
    }

    /// Term×sentence counts over the non-stopword vocabulary, or `None`
    /// when no such vocabulary exists (rank-0 matrix).
    fn term_sentence_matrix(&self, document: &TokenizedDocument) -> Option<DMatrix<f64>> {
        let mut rows: BTreeMap<&str, usize> = BTreeMap::new();
        for sentence in document.sentences() {
            for word in &sentence.words {
                if !self.profile.is_stopword(word) {
                    rows.entry(word.as_str()).or_default();
                }
            }
        }
        if rows.is_empty() {
            return None;
        }
        // Row numbering follows lexicographic vocabulary order.
        for (row, slot) in rows.values_mut().enumerate() {
            *slot = row;
        }

        let mut matrix = DMatrix::zeros(rows.len(), document.len());
        for sentence in document.sentences() {
            for word in &sentence.words {
                if let Some(&row) = rows.get(word.as_str()) {
                    matrix[(row, sentence.index)] += 1.0;
                }
            }
        }
        Some(matrix)
    }

    fn latent_scores(
        &self,
        document: &TokenizedDocument,
    ) -> Result<ScoreMap, DecompositionError> {
        let matrix = self
            .term_sentence_matrix(document)
            .ok_or(DecompositionError::EmptyVocabulary)?;

        let columns = matrix.ncols();
        let retained = self.rank.min(matrix.nrows()).min(columns);

        let svd = matrix
            .try_svd(false, true, SVD_EPSILON, SVD_MAX_ITERATIONS)
            .ok_or(DecompositionError::DidNotConverge)?;
        let v_t = svd.v_t.ok_or(DecompositionError::DidNotConverge)?;

        let mut scores = ScoreMap::new();
        for column in 0..columns {
            let mut sum = 0.0;
            for component in 0..retained {
                let weighted = svd.singular_values[component] * v_t[(component, column)];
                sum += weighted * weighted;
            }
            scores.insert(column, sum.sqrt());
        }
        Ok(scores)
    }
}

impl SentenceScorer for LatentScorer {
    fn score(&self, document: &TokenizedDocument) -> ScoreMap {
        if document.is_empty() {
            return ScoreMap::new();
        }
        match self.latent_scores(document) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(error = %err, "latent scoring unavailable, falling back to term frequency");
                self.fallback.score(document)
            }
        }
    }
}
