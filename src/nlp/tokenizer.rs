use thiserror::Error;

use crate::nlp::language::LanguageProfile;

#[derive(Debug, Error)]
pub enum TokenizeError {
    /// "No summary possible" for this item, not a pipeline-level failure.
    #[error("input is empty or whitespace-only")]
    EmptyInput,
}

/// One sentence with its stable, 0-based original-order index.
///
/// `text` is the original sentence (whitespace collapsed) so summaries can
/// be reassembled verbatim; `words` are the normalized tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
    pub words: Vec<String>,
}

/// Ordered sentences of one item description.
///
/// Read-only after construction, except the explicit [`truncate`] cap.
/// Indices are assigned once and never renumbered.
///
/// [`truncate`]: TokenizedDocument::truncate
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenizedDocument {
    sentences: Vec<Sentence>,
}

impl TokenizedDocument {
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Cap the document at `max` sentences. Bounds worst-case scoring cost
    /// per item; the surviving indices keep their original values.
    pub fn truncate(&mut self, max: usize) {
        self.sentences.truncate(max);
    }
}

/// Split `text` into sentences and normalized word tokens.
///
/// Sentence boundaries are runs of the profile's terminator characters
/// (closing quotes and brackets attach to the finished sentence); blank
/// lines also split. Words are lowercased with leading/trailing
/// punctuation stripped; tokens without any alphanumeric character are
/// discarded, and sentences left with no tokens are dropped.
///
/// Deterministic: identical input and profile yield identical output.
pub fn tokenize(
    text: &str,
    profile: &LanguageProfile,
) -> Result<TokenizedDocument, TokenizeError> {
    if text.trim().is_empty() {
        return Err(TokenizeError::EmptyInput);
    }

    let mut sentences = Vec::new();
    for paragraph in text.split("\n\n") {
        for raw in split_sentences(paragraph, profile) {
            let words = split_words(&raw);
            if words.is_empty() {
                continue;
            }
            sentences.push(Sentence {
                index: sentences.len(),
                text: raw,
                words,
            });
        }
    }

    Ok(TokenizedDocument { sentences })
}

fn split_sentences(paragraph: &str, profile: &LanguageProfile) -> Vec<String> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut chars = paragraph.chars().peekable();

    while let Some(c) = chars.next() {
        buf.push(c);
        if profile.is_sentence_terminator(c) {
            // Absorb terminator runs ("?!", "...") and closing punctuation.
            while let Some(&next) = chars.peek() {
                if profile.is_sentence_terminator(next)
                    || matches!(next, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
                {
                    buf.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            flush_sentence(&mut buf, &mut out);
        }
    }
    flush_sentence(&mut buf, &mut out);

    out
}

/// Push the buffered sentence with its whitespace collapsed, if any.
fn flush_sentence(buf: &mut String, out: &mut Vec<String>) {
    let collapsed = buf.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        out.push(collapsed);
    }
    buf.clear();
}

fn split_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
        .collect()
}
