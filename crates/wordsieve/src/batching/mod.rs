//! # Batching
//!
//! A [`BatchIterator`] plans each epoch as minibatches of example indices;
//! a [`BatchCollator`] turns one minibatch into padded id rows.
//!
//! ## Example
//!
//! ```rust
//! use wordsieve::batching::{BatchCollator, BatchIteratorOptions, SequenceCollator};
//!
//! let seqs: Vec<Vec<u32>> = vec![vec![2, 7, 3], vec![2, 3], vec![2, 9, 9, 3]];
//! let mut iterator = BatchIteratorOptions::eval()
//!     .with_batch_size(2)
//!     .init(seqs.iter().map(Vec::len).collect())
//!     .unwrap();
//!
//! let collator = SequenceCollator::new(1u32);
//! let batches: Vec<_> = iterator
//!     .epoch()
//!     .iter()
//!     .map(|indices| collator.collate_indices(&seqs, indices).unwrap())
//!     .collect();
//!
//! assert_eq!(batches[0].ids, vec![vec![2, 3, 1], vec![2, 7, 3]]);
//! ```

mod batch_iterator;
mod collators;

#[doc(inline)]
pub use batch_iterator::*;
#[doc(inline)]
pub use collators::*;
