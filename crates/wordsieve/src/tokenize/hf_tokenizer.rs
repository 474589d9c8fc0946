//! # ``tokenizer.json`` Subword Tokenizer

use std::path::Path;

use crate::{
    errors::{WSResult, WordsieveError},
    tokenize::TextTokenizer,
};

/// Subword tokenizer backed by a ``tokenizers`` ``tokenizer.json``.
///
/// Yields token pieces (not ids); boundary tokens are left to the dataset.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// Load a ``tokenizer.json`` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> WSResult<Self> {
        let inner = tokenizers::Tokenizer::from_file(path.as_ref())
            .map_err(|e| WordsieveError::Tokenizer(e.to_string()))?;
        Ok(Self { inner })
    }

    /// The wrapped tokenizer.
    pub fn inner(&self) -> &tokenizers::Tokenizer {
        &self.inner
    }

    /// The `(piece, id)` pairs of the model vocabulary, ordered by id.
    pub fn vocab_pairs(&self) -> Vec<(String, u32)> {
        let mut pairs: Vec<(String, u32)> = self.inner.get_vocab(true).into_iter().collect();
        pairs.sort_by_key(|&(_, id)| id);
        pairs
    }
}

impl TextTokenizer for HfTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> WSResult<Vec<String>> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| WordsieveError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }
}
