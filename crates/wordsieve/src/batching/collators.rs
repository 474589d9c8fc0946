//! # Batch Collators
//!
//! Turn a planned minibatch of examples into id tensors (as nested vecs).

use crate::{
    batching::BatchIterator,
    data::{TextField, TokenizedExample},
    errors::{WSResult, WordsieveError},
    types::TokenType,
    vocab::{LabelVocab, TokenVocab},
};

/// Collates a minibatch of examples into a batch.
pub trait BatchCollator<E> {
    /// The collated batch type.
    type Batch;

    /// Collate the examples of one minibatch, in order.
    fn collate(
        &self,
        examples: &[&E],
    ) -> WSResult<Self::Batch>;

    /// Collate the examples at the given indices.
    fn collate_indices(
        &self,
        examples: &[E],
        indices: &[usize],
    ) -> WSResult<Self::Batch> {
        let batch = indices
            .iter()
            .map(|&index| {
                examples
                    .get(index)
                    .ok_or(WordsieveError::ExampleOutOfRange {
                        index,
                        len: examples.len(),
                    })
            })
            .collect::<WSResult<Vec<&E>>>()?;
        self.collate(&batch)
    }
}

/// Collate every batch of the iterator's next epoch.
pub fn collate_epoch<E, C>(
    iterator: &mut BatchIterator,
    examples: &[E],
    collator: &C,
) -> WSResult<Vec<C::Batch>>
where
    C: BatchCollator<E>,
{
    iterator
        .epoch()
        .iter()
        .map(|indices| collator.collate_indices(examples, indices))
        .collect()
}

/// A classifier minibatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationBatch<T: TokenType = u32> {
    /// `[batch x fix_length]` token ids.
    pub text: Vec<Vec<T>>,

    /// Unpadded row lengths, when the field reports them.
    pub lengths: Option<Vec<usize>>,

    /// Class ids.
    pub labels: Vec<T>,
}

impl<T: TokenType> ClassificationBatch<T> {
    /// The number of examples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Pads and numericalizes [`TokenizedExample`]s through a [`TextField`].
pub struct ClassificationCollator<'a, T: TokenType = u32> {
    field: &'a TextField,
    vocab: &'a TokenVocab<T>,
    labels: &'a LabelVocab<T>,
}

impl<'a, T: TokenType> ClassificationCollator<'a, T> {
    /// Create a collator.
    pub fn new(
        field: &'a TextField,
        vocab: &'a TokenVocab<T>,
        labels: &'a LabelVocab<T>,
    ) -> Self {
        Self {
            field,
            vocab,
            labels,
        }
    }
}

impl<T: TokenType> BatchCollator<TokenizedExample> for ClassificationCollator<'_, T> {
    type Batch = ClassificationBatch<T>;

    fn collate(
        &self,
        examples: &[&TokenizedExample],
    ) -> WSResult<Self::Batch> {
        let tokens: Vec<&[String]> = examples.iter().map(|e| e.tokens.as_slice()).collect();
        let padded = self.field.process(&tokens, self.vocab)?;
        let labels = examples
            .iter()
            .map(|e| self.labels.encode(&e.label))
            .collect::<WSResult<Vec<T>>>()?;

        Ok(ClassificationBatch {
            text: padded.rows,
            lengths: padded.lengths,
            labels,
        })
    }
}

/// A padded minibatch of id sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceBatch<T: TokenType = u32> {
    /// `[batch x max_len]` token ids.
    pub ids: Vec<Vec<T>>,

    /// Unpadded lengths, after any truncation.
    pub lengths: Vec<usize>,
}

/// Right-pads id sequences to the longest in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCollator<T: TokenType = u32> {
    pad_id: T,
    max_len: Option<usize>,
}

impl<T: TokenType> SequenceCollator<T> {
    /// Create a collator padding with `pad_id`.
    pub fn new(pad_id: T) -> Self {
        Self {
            pad_id,
            max_len: None,
        }
    }

    /// Truncate sequences longer than `max_len`.
    pub fn with_max_len(
        self,
        max_len: Option<usize>,
    ) -> Self {
        Self { max_len, ..self }
    }

    /// The pad id.
    pub fn pad_id(&self) -> T {
        self.pad_id
    }
}

impl<T: TokenType> BatchCollator<Vec<T>> for SequenceCollator<T> {
    type Batch = SequenceBatch<T>;

    fn collate(
        &self,
        examples: &[&Vec<T>],
    ) -> WSResult<Self::Batch> {
        let cap = self.max_len.unwrap_or(usize::MAX);
        let lengths: Vec<usize> = examples.iter().map(|seq| seq.len().min(cap)).collect();
        let width = lengths.iter().copied().max().unwrap_or(0);

        let ids = examples
            .iter()
            .zip(&lengths)
            .map(|(seq, &len)| {
                let mut row = Vec::with_capacity(width);
                row.extend_from_slice(&seq[..len]);
                row.resize(width, self.pad_id);
                row
            })
            .collect();

        Ok(SequenceBatch { ids, lengths })
    }
}
