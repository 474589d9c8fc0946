//! # Whitespace Tokenizer

use crate::{errors::WSResult, tokenize::TextTokenizer};

/// Splits on unicode whitespace; no normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl TextTokenizer for WhitespaceTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> WSResult<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
