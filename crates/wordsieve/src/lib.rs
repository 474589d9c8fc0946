//! # `wordsieve` Text Dataset Preparation
//!
//! Turns raw CSV corpora into model-ready id tensors for two workloads:
//!
//! * text classification: ``text,label`` rows are tokenized, lowercased,
//!   truncated/padded to a fixed length, and batched with their class ids;
//!   see [`data::ClassificationPipeline`].
//! * language-model fine-tuning: a text column is tokenized into
//!   ``[bos] ids [eos]`` sequences, keeping only those inside a length
//!   window; see [`data::LmDataset`].
//!
//! See:
//! * [`tokenize`] to split text into tokens.
//! * [`vocab`] to build, load, and save token and label vocabularies.
//! * [`data`] to read corpora, split them, and build datasets.
//! * [`batching`] to plan and collate minibatches.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use wordsieve::data::{LengthWindow, LmDataset};
//! use wordsieve::tokenize::BasicEnglishTokenizer;
//! use wordsieve::vocab::{SpecialTokens, VocabBuilderOptions};
//!
//! let texts = vec!["Hello, world!".to_string(), "Hi".to_string()];
//! let tokenizer = BasicEnglishTokenizer::new();
//!
//! let vocab = VocabBuilderOptions::default()
//!     .with_specials(SpecialTokens::language_model())
//!     .build_from_samples::<u32, _, _>(vec![vec!["hello", ",", "world", "!"]])
//!     .unwrap();
//!
//! let window = LengthWindow::new(4, 8).unwrap();
//! let dataset = LmDataset::from_texts(&texts, &tokenizer, &vocab, window).unwrap();
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.stats().too_short, 1);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "download")]
#[doc(inline)]
pub use wordsieve_disk_cache as disk_cache;

pub mod batching;
pub mod data;
pub mod errors;
#[cfg(feature = "pretrained")]
pub mod pretrained;
pub mod resources;
pub mod tokenize;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WSResult, WordsieveError};
