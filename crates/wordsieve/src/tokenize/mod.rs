//! # Text Tokenizers
//!
//! A [`TextTokenizer`] splits raw text into string tokens; the mapping of
//! tokens to ids is the job of [`crate::vocab`].
//!
//! * [`BasicEnglishTokenizer`] - lowercasing, punctuation-splitting word tokenizer.
//! * [`WhitespaceTokenizer`] - split on whitespace only.
//! * `HfTokenizer` - subword pieces from a ``tokenizer.json`` (feature ``huggingface``).

mod basic_english;
#[cfg(feature = "huggingface")]
mod hf_tokenizer;
mod pieces;
mod whitespace;

#[doc(inline)]
pub use basic_english::*;
#[cfg(feature = "huggingface")]
#[doc(inline)]
pub use hf_tokenizer::*;
#[doc(inline)]
pub use pieces::*;
#[doc(inline)]
pub use whitespace::*;

use crate::errors::WSResult;

/// Splits text into string tokens.
pub trait TextTokenizer: Send + Sync {
    /// Tokenize a single text.
    fn tokenize(
        &self,
        text: &str,
    ) -> WSResult<Vec<String>>;

    /// Tokenize a batch of texts, preserving order.
    fn tokenize_batch(
        &self,
        texts: &[String],
    ) -> WSResult<Vec<Vec<String>>> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                use rayon::prelude::*;
                texts.par_iter().map(|text| self.tokenize(text)).collect()
            } else {
                texts.iter().map(|text| self.tokenize(text)).collect()
            }
        }
    }
}

impl<K: TextTokenizer + ?Sized> TextTokenizer for Box<K> {
    fn tokenize(
        &self,
        text: &str,
    ) -> WSResult<Vec<String>> {
        (**self).tokenize(text)
    }
}

impl<K: TextTokenizer + ?Sized> TextTokenizer for std::sync::Arc<K> {
    fn tokenize(
        &self,
        text: &str,
    ) -> WSResult<Vec<String>> {
        (**self).tokenize(text)
    }
}

/// Selector for the built-in word tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TokenizerKind {
    /// See [`BasicEnglishTokenizer`].
    #[default]
    BasicEnglish,

    /// See [`WhitespaceTokenizer`].
    Whitespace,
}

impl TokenizerKind {
    /// Build the selected tokenizer.
    pub fn build(self) -> Box<dyn TextTokenizer> {
        match self {
            Self::BasicEnglish => Box::new(BasicEnglishTokenizer::new()),
            Self::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_tokenizer_kind() {
        assert_eq!(
            TokenizerKind::from_str("basic_english").unwrap(),
            TokenizerKind::BasicEnglish
        );
        assert_eq!(
            TokenizerKind::from_str("whitespace").unwrap(),
            TokenizerKind::Whitespace
        );
        assert!(TokenizerKind::from_str("sentencepiece").is_err());
        assert_eq!(TokenizerKind::BasicEnglish.to_string(), "basic_english");
    }

    #[test]
    fn test_tokenize_batch_preserves_order() {
        let tokenizer = TokenizerKind::Whitespace.build();
        let texts: Vec<String> = (0..100).map(|i| format!("t{i} x")).collect();
        let batch = tokenizer.tokenize_batch(&texts).unwrap();
        assert_eq!(batch.len(), 100);
        for (i, tokens) in batch.iter().enumerate() {
            assert_eq!(tokens, &vec![format!("t{i}"), "x".to_string()]);
        }
    }
}
