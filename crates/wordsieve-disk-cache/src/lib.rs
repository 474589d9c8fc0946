//! # wordsieve-disk-cache
//!
//! Cache and data directory resolution for `wordsieve`, plus a download
//! cache for remote resources such as pretrained tokenizer files.
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod checksum;
pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{WordsieveDiskCache, WordsieveDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const WORDSIEVE_CACHE_DIR: &str = "WORDSIEVE_CACHE_DIR";
/// Environment variable key to override the default data directory.
pub const WORDSIEVE_DATA_DIR: &str = "WORDSIEVE_DATA_DIR";

/// Default [`PathResolver`] for wordsieve.
pub const WORDSIEVE_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.wordsieve",
    organization: "",
    application: "wordsieve",
    cache_env_vars: &[WORDSIEVE_CACHE_DIR],
    data_env_vars: &[WORDSIEVE_DATA_DIR],
};
