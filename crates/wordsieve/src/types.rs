//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{WSResult, WordsieveError};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max id in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert a vocabulary index to a token id.
pub fn try_token_from_index<T: TokenType>(index: usize) -> WSResult<T> {
    T::from_usize(index).ok_or(WordsieveError::TokenOutOfRange {
        id: index,
        size: T::max_value().to_usize().unwrap_or(usize::MAX),
    })
}

/// Convert a token id to a vocabulary index.
pub fn token_to_index<T: TokenType>(token: T) -> usize {
    // Every TokenType fits in usize on the targets we build for.
    token.to_usize().unwrap_or(usize::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = ahash::AHashMap<K, V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = std::collections::HashMap<K, V>;
    }
}

/// Create a new empty hash map.
pub fn hash_map_new<K, V>() -> WSHashMap<K, V> {
    WSHashMap::default()
}
