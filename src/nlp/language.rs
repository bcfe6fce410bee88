use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Stopword set and sentence-boundary rules for one language.
///
/// Constructed explicitly and passed as an argument into the tokenizer and
/// scorers; there is no ambient global initialization step.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Stopwords, stored lowercase.
    stopwords: HashSet<String>,
    /// Characters that end a sentence.
    terminators: Vec<char>,
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::english()
    }
}

impl LanguageProfile {
    /// Built-in English profile backed by the `stop-words` list.
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self {
            stopwords,
            terminators: vec!['.', '!', '?'],
        }
    }

    /// Profile with a custom stopword list and the default boundary rules.
    pub fn from_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            terminators: vec!['.', '!', '?'],
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn is_sentence_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}
