//! # Label Vocabulary

use crate::{
    errors::{WSResult, WordsieveError},
    types::{TokenType, token_to_index},
    vocab::{SpecialTokens, TokenCounter, TokenVocab},
};

/// Class label <-> class id mapping.
///
/// Labels are ordered by descending frequency, ties by ascending label;
/// there is no unknown class.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVocab<T: TokenType = u32> {
    inner: TokenVocab<T>,
}

impl<T: TokenType> LabelVocab<T> {
    /// Build from observed labels.
    pub fn from_labels<I, S>(labels: I) -> WSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = TokenCounter::new();
        counter.update(labels);
        let ordered: Vec<String> = counter
            .most_common()
            .into_iter()
            .map(|(label, _)| label.to_string())
            .collect();
        Self::from_ordered(ordered)
    }

    /// Build from an explicit class order.
    pub fn from_ordered<I, S>(labels: I) -> WSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            inner: TokenVocab::from_tokens(labels, SpecialTokens::none())?,
        })
    }

    /// The number of classes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The labels, in class id order.
    pub fn labels(&self) -> &[String] {
        self.inner.tokens()
    }

    /// The class id of a label.
    pub fn encode(
        &self,
        label: &str,
    ) -> WSResult<T> {
        self.inner
            .lookup(label)
            .ok_or_else(|| WordsieveError::UnknownLabel(label.to_string()))
    }

    /// The label of a class id.
    pub fn decode(
        &self,
        id: T,
    ) -> WSResult<&str> {
        self.labels()
            .get(token_to_index(id))
            .map(String::as_str)
            .ok_or(WordsieveError::TokenOutOfRange {
                id: token_to_index(id),
                size: self.len(),
            })
    }

    /// The underlying token vocabulary.
    pub fn as_token_vocab(&self) -> &TokenVocab<T> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_vocab() {
        let vocab: LabelVocab<u32> =
            LabelVocab::from_labels(["pos", "neg", "neg", "pos", "neg", "meh"]).unwrap();

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.labels(), &["neg", "pos", "meh"].map(String::from));
        assert_eq!(vocab.encode("neg").unwrap(), 0);
        assert_eq!(vocab.encode("meh").unwrap(), 2);
        assert_eq!(vocab.decode(1).unwrap(), "pos");

        assert!(matches!(
            vocab.encode("other"),
            Err(WordsieveError::UnknownLabel(l)) if l == "other"
        ));
        assert!(vocab.decode(3).is_err());
    }

    #[test]
    fn test_tie_break() {
        let vocab: LabelVocab<u8> = LabelVocab::from_labels(["1", "0"]).unwrap();
        assert_eq!(vocab.labels(), &["0", "1"].map(String::from));
    }

    #[test]
    fn test_empty() {
        let empty: Vec<&str> = Vec::new();
        assert!(LabelVocab::<u32>::from_labels(empty).is_err());
    }
}
