//! # Vocabulary Builder

use crate::{
    errors::{WSResult, WordsieveError},
    types::TokenType,
    vocab::{SpecialTokens, TokenCounter, TokenVocab},
};

/// Options for building a [`TokenVocab`] from token counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabBuilderOptions {
    /// Minimum count for a token to be included.
    pub min_freq: usize,

    /// Maximum number of non-special tokens; `None` for no limit.
    pub max_size: Option<usize>,

    /// Special tokens; placed first, in `unk, pad, bos, eos` order.
    pub specials: SpecialTokens,
}

impl Default for VocabBuilderOptions {
    fn default() -> Self {
        Self {
            min_freq: 1,
            max_size: None,
            specials: SpecialTokens::classifier(),
        }
    }
}

impl VocabBuilderOptions {
    /// Set the minimum token count; values below 1 are treated as 1.
    pub fn with_min_freq(
        self,
        min_freq: usize,
    ) -> Self {
        Self {
            min_freq: min_freq.max(1),
            ..self
        }
    }

    /// Set the maximum number of non-special tokens.
    pub fn with_max_size(
        self,
        max_size: Option<usize>,
    ) -> Self {
        Self { max_size, ..self }
    }

    /// Set the special tokens.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Build a vocabulary from token counts.
    ///
    /// Ordering: specials, then tokens by descending count,
    /// ties broken by ascending token.
    pub fn build<T: TokenType>(
        &self,
        counter: &TokenCounter,
    ) -> WSResult<TokenVocab<T>> {
        let specials = self.specials.ordered();
        let limit = self.max_size.unwrap_or(usize::MAX);

        let mut itos: Vec<String> = specials.iter().map(|s| s.to_string()).collect();
        let mut taken = 0;
        for (token, count) in counter.most_common() {
            if taken >= limit || count < self.min_freq {
                break;
            }
            if specials.contains(&token) {
                continue;
            }
            itos.push(token.to_string());
            taken += 1;
        }

        if itos.is_empty() {
            return Err(WordsieveError::EmptyVocab);
        }

        log::debug!(
            "built vocab: {} tokens ({} specials) from {} distinct",
            itos.len(),
            specials.len(),
            counter.len()
        );

        TokenVocab::from_tokens(itos, self.specials.clone())
    }

    /// Count tokenized samples and build a vocabulary.
    pub fn build_from_samples<T, I, S>(
        &self,
        samples: I,
    ) -> WSResult<TokenVocab<T>>
    where
        T: TokenType,
        I: IntoIterator<Item = S>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut counter = TokenCounter::new();
        counter.update_from_samples(samples);
        self.build(&counter)
    }
}
