//! Extractive summarization engine for syndicated news feeds.
//!
//! `feedbrief` selects the sentences of a short news excerpt that best
//! represent it, using interchangeable scoring strategies (term-frequency
//! ranking and latent-semantic SVD ranking) plus a keyword topic filter
//! that decides which incoming items are worth summarizing at all. A
//! pipeline coordinator runs fetch, filter, and summarize per source and
//! isolates every failure at the item or source boundary: a run as a whole
//! cannot fail.
//!
//! All tokenization and scoring is deterministic — identical inputs always
//! produce identical outputs.

pub mod feed;
pub mod filter;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summary;
pub mod types;
