//! # Datasets
//!
//! Raw CSV corpora, text fields, splits, and the two dataset builders:
//!
//! * [`ClassificationPipeline`] - labeled texts to train/valid/test batches.
//! * [`LmDataset`] - texts to length-filtered ``[bos] ids [eos]`` sequences.

mod classification;
mod csv_io;
mod lm_dataset;
mod records;
mod split;
mod text_field;

#[doc(inline)]
pub use classification::*;
#[doc(inline)]
pub use csv_io::*;
#[doc(inline)]
pub use lm_dataset::*;
#[doc(inline)]
pub use records::*;
#[doc(inline)]
pub use split::*;
#[doc(inline)]
pub use text_field::*;
