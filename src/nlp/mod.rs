pub mod language;
pub mod tokenizer;

pub use language::LanguageProfile;
pub use tokenizer::{tokenize, Sentence, TokenizeError, TokenizedDocument};
