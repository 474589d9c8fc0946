//! # Language-Model Dataset
//!
//! Each text becomes ``[bos] + ids + [eos]``; only sequences whose length,
//! boundary tokens included, falls inside a [`LengthWindow`] are kept.

use crate::{
    errors::{WSResult, WordsieveError},
    tokenize::TextTokenizer,
    types::TokenType,
    vocab::{SpecialRole, TokenVocab},
};

/// Default minimum sequence length (inclusive).
pub const DEFAULT_MIN_SEQ_LEN: usize = 100;

/// Default maximum sequence length (inclusive).
pub const DEFAULT_MAX_SEQ_LEN: usize = 1024;

/// Inclusive sequence length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    min: usize,
    max: usize,
}

impl Default for LengthWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SEQ_LEN,
            max: DEFAULT_MAX_SEQ_LEN,
        }
    }
}

impl LengthWindow {
    /// Create a window; `min` must not exceed `max`.
    pub fn new(
        min: usize,
        max: usize,
    ) -> WSResult<Self> {
        if min > max {
            return Err(WordsieveError::InvalidLengthWindow { min, max });
        }
        Ok(Self { min, max })
    }

    /// The lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// The upper bound.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Classify a length against the window.
    pub fn check(
        &self,
        len: usize,
    ) -> LengthCheck {
        if len < self.min {
            LengthCheck::TooShort
        } else if len > self.max {
            LengthCheck::TooLong
        } else {
            LengthCheck::Fits
        }
    }

    /// Is `min <= len <= max`?
    pub fn contains(
        &self,
        len: usize,
    ) -> bool {
        self.check(len) == LengthCheck::Fits
    }
}

/// The outcome of [`LengthWindow::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCheck {
    /// Below the window.
    TooShort,

    /// Inside the window.
    Fits,

    /// Above the window.
    TooLong,
}

/// Counts of what the length filter did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    /// Sequences offered.
    pub total: usize,

    /// Sequences kept.
    pub kept: usize,

    /// Sequences dropped as too short.
    pub too_short: usize,

    /// Sequences dropped as too long.
    pub too_long: usize,
}

/// A dataset of length-filtered id sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LmDataset<T: TokenType = u32> {
    data: Vec<Vec<T>>,
    window: LengthWindow,
    stats: FilterStats,
}

impl<T: TokenType> LmDataset<T> {
    /// Filter already-numericalized sequences.
    ///
    /// The sequences are expected to include their boundary tokens.
    pub fn from_sequences<I>(
        sequences: I,
        window: LengthWindow,
    ) -> Self
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut stats = FilterStats::default();
        let mut data = Vec::new();
        for seq in sequences {
            stats.total += 1;
            match window.check(seq.len()) {
                LengthCheck::TooShort => stats.too_short += 1,
                LengthCheck::TooLong => stats.too_long += 1,
                LengthCheck::Fits => {
                    stats.kept += 1;
                    data.push(seq);
                }
            }
        }

        log::info!(
            "lm dataset: kept {} of {} ({} too short, {} too long; window {}..={})",
            stats.kept,
            stats.total,
            stats.too_short,
            stats.too_long,
            window.min(),
            window.max()
        );

        Self {
            data,
            window,
            stats,
        }
    }

    /// Tokenize, add boundary tokens, numericalize and filter texts.
    ///
    /// The vocabulary must define the begin and end tokens;
    /// out-of-vocabulary pieces map to its unknown token.
    pub fn from_texts<K: TextTokenizer + ?Sized>(
        texts: &[String],
        tokenizer: &K,
        vocab: &TokenVocab<T>,
        window: LengthWindow,
    ) -> WSResult<Self> {
        let bos = vocab.try_special_id(SpecialRole::Begin)?;
        let eos = vocab.try_special_id(SpecialRole::End)?;

        let tokenized = tokenizer.tokenize_batch(texts)?;
        let sequences = tokenized
            .iter()
            .map(|tokens| -> WSResult<Vec<T>> {
                let mut ids = Vec::with_capacity(tokens.len() + 2);
                ids.push(bos);
                ids.extend(vocab.encode(tokens)?);
                ids.push(eos);
                Ok(ids)
            })
            .collect::<WSResult<Vec<Vec<T>>>>()?;

        Ok(Self::from_sequences(sequences, window))
    }

    /// The number of retained sequences.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Is the dataset empty?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a sequence by index.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&[T]> {
        self.data.get(index).map(Vec::as_slice)
    }

    /// Iterate over the sequences.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// The retained sequences.
    pub fn sequences(&self) -> &[Vec<T>] {
        &self.data
    }

    /// Release the retained sequences.
    pub fn into_sequences(self) -> Vec<Vec<T>> {
        self.data
    }

    /// The window used to filter.
    pub fn window(&self) -> LengthWindow {
        self.window
    }

    /// What the filter did.
    pub fn stats(&self) -> FilterStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        tokenize::WhitespaceTokenizer,
        vocab::{SpecialTokens, VocabBuilderOptions},
    };

    #[test]
    fn test_window() {
        let window = LengthWindow::default();
        assert_eq!((window.min(), window.max()), (100, 1024));
        assert!(!window.contains(99));
        assert!(window.contains(100));
        assert!(window.contains(1024));
        assert!(!window.contains(1025));
        assert_eq!(window.check(0), LengthCheck::TooShort);
        assert_eq!(window.check(2000), LengthCheck::TooLong);

        assert!(LengthWindow::new(3, 3).is_ok());
        assert!(matches!(
            LengthWindow::new(4, 3),
            Err(WordsieveError::InvalidLengthWindow { min: 4, max: 3 })
        ));
    }

    #[test]
    fn test_from_sequences() {
        let window = LengthWindow::new(2, 4).unwrap();
        let dataset: LmDataset<u32> = LmDataset::from_sequences(
            vec![vec![1], vec![1, 2], vec![1, 2, 3, 4], vec![1, 2, 3, 4, 5]],
            window,
        );

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(0), Some(&[1u32, 2][..]));
        assert_eq!(dataset.get(2), None);
        assert_eq!(
            dataset.stats(),
            FilterStats {
                total: 4,
                kept: 2,
                too_short: 1,
                too_long: 1,
            }
        );
    }

    #[test]
    fn test_from_texts() {
        let texts: Vec<String> = vec!["a b".into(), "a".into(), "a b c d".into(), "".into()];
        let vocab: TokenVocab<u32> = VocabBuilderOptions::default()
            .with_specials(SpecialTokens::language_model())
            .build_from_samples(vec![vec!["a", "b", "c"]])
            .unwrap();

        // Lengths with boundary tokens: 4, 3, 6, 2.
        let window = LengthWindow::new(3, 4).unwrap();
        let dataset = LmDataset::from_texts(&texts, &WhitespaceTokenizer, &vocab, window).unwrap();

        assert_eq!(dataset.len(), 2);
        // <s>=2, </s>=3, a=4, b=5
        assert_eq!(dataset.sequences(), &[vec![2, 4, 5, 3], vec![2, 4, 3]]);
        assert_eq!(dataset.iter().count(), 2);
    }

    #[test]
    fn test_from_texts_requires_boundaries() {
        let vocab: TokenVocab<u32> = VocabBuilderOptions::default()
            .build_from_samples(vec![vec!["a"]])
            .unwrap();
        let texts = vec!["a".to_string()];
        assert!(matches!(
            LmDataset::from_texts(&texts, &WhitespaceTokenizer, &vocab, LengthWindow::default()),
            Err(WordsieveError::MissingSpecialToken(_))
        ));
    }
}
