use std::cmp::Ordering;

use crate::nlp::TokenizedDocument;
use crate::scoring::ScoreMap;
use crate::types::SummaryResult;

/// Select the `k` highest-scoring sentences and reassemble them in
/// original document order.
///
/// `k` is clamped to `[1, document.len()]`; an empty document yields an
/// empty result. Sentences missing from the score map count as 0. Ties
/// break toward the lower original index, so selection is deterministic
/// regardless of the order scores were computed in.
pub fn select(document: &TokenizedDocument, scores: &ScoreMap, k: usize) -> SummaryResult {
    let total = document.len();
    if total == 0 {
        return SummaryResult::default();
    }
    let k = k.clamp(1, total);

    // Ordering phase: (score desc, index asc).
    let mut ranked: Vec<(usize, f64)> = (0..total)
        .map(|index| (index, scores.get(&index).copied().unwrap_or(0.0)))
        .collect();
    ranked.sort_by(|a, b| {
        let score_cmp = b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal);
        if score_cmp != Ordering::Equal {
            score_cmp
        } else {
            a.0.cmp(&b.0)
        }
    });

    // Reassembly phase: narrative order, not score order.
    let mut sentence_indices: Vec<usize> =
        ranked.into_iter().take(k).map(|(index, _)| index).collect();
    sentence_indices.sort_unstable();

    debug_assert!(sentence_indices.windows(2).all(|w| w[0] < w[1]));

    let text = sentence_indices
        .iter()
        .map(|&index| document.sentences()[index].text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    SummaryResult {
        text,
        sentence_indices,
    }
}
