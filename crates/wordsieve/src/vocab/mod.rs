//! # Vocabulary
//!
//! This module provides token and label vocabularies, and their io.
//!
//! ## Token Vocabulary
//!
//! [`TokenVocab`] maps token strings to dense ids; reserved roles are
//! described by [`SpecialTokens`]. Vocabularies are either loaded
//! (see [`io`]) or built from a [`TokenCounter`] with [`VocabBuilderOptions`].
//!
//! ## Label Vocabulary
//!
//! [`LabelVocab`] maps class labels to class ids, with no unknown class.
pub mod io;

mod label_vocab;
mod special_tokens;
mod token_counter;
mod token_vocab;
mod vocab_builder;

#[doc(inline)]
pub use label_vocab::*;
#[doc(inline)]
pub use special_tokens::*;
#[doc(inline)]
pub use token_counter::*;
#[doc(inline)]
pub use token_vocab::*;
#[doc(inline)]
pub use vocab_builder::*;
