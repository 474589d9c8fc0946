//! # Pretrained Tokenizers
//!
//! Named subword tokenizers, fetched through a [`ResourceLoader`]
//! (usually the disk cache).
//!
//! ```rust,ignore
//! use wordsieve::disk_cache::WordsieveDiskCache;
//! use wordsieve::pretrained::PretrainedTokenizer;
//!
//! let mut cache = WordsieveDiskCache::new(Default::default())?;
//! let (tokenizer, vocab) = PretrainedTokenizer::KoGpt2.load::<u32>(&mut cache)?;
//! ```

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::{
    errors::{WSResult, WordsieveError},
    resources::{ConstKeyedResource, ConstUrlResource, KeyedResource, ResourceLoader},
    tokenize::HfTokenizer,
    types::TokenType,
    vocab::{SpecialTokens, TokenVocab, io::vocab_from_hf_tokenizer},
};

/// The KoGPT2 ``tokenizer.json``.
pub const KOGPT2_TOKENIZER_RESOURCE: ConstKeyedResource = ConstKeyedResource {
    key: &["skt", "kogpt2-base-v2"],
    resource: ConstUrlResource {
        urls: &["https://huggingface.co/skt/kogpt2-base-v2/resolve/main/tokenizer.json"],
        hash: None,
    },
};

/// Known pretrained tokenizers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::EnumIter, strum::Display,
)]
#[non_exhaustive]
pub enum PretrainedTokenizer {
    /// SKT KoGPT2 (Korean GPT-2) sentencepiece tokenizer.
    #[strum(to_string = "kogpt2", serialize = "skt/kogpt2-base-v2")]
    KoGpt2,
}

impl PretrainedTokenizer {
    /// Look up a tokenizer by name or alias.
    pub fn by_name(name: &str) -> WSResult<Self> {
        Self::from_str(name).map_err(|_| {
            WordsieveError::External(format!(
                "unknown pretrained tokenizer {name:?}; known: {:?}",
                list_pretrained()
            ))
        })
    }

    /// The ``tokenizer.json`` resource.
    pub fn resource(&self) -> KeyedResource {
        match self {
            Self::KoGpt2 => KOGPT2_TOKENIZER_RESOURCE.into(),
        }
    }

    /// The vocabulary's special tokens.
    pub fn specials(&self) -> SpecialTokens {
        match self {
            Self::KoGpt2 => SpecialTokens::language_model(),
        }
    }

    /// Fetch and load the tokenizer.
    pub fn load_tokenizer(
        &self,
        loader: &mut dyn ResourceLoader,
    ) -> WSResult<HfTokenizer> {
        let path = loader.load_resource_path(&self.resource())?;
        log::info!("loading {self} tokenizer from {}", path.display());
        HfTokenizer::from_file(path)
    }

    /// Fetch and load the tokenizer, and adopt its vocabulary.
    pub fn load<T: TokenType>(
        &self,
        loader: &mut dyn ResourceLoader,
    ) -> WSResult<(HfTokenizer, TokenVocab<T>)> {
        let tokenizer = self.load_tokenizer(loader)?;
        let vocab = vocab_from_hf_tokenizer(&tokenizer, self.specials())?;
        Ok((tokenizer, vocab))
    }
}

/// The primary names of the known pretrained tokenizers.
pub fn list_pretrained() -> Vec<String> {
    PretrainedTokenizer::iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempdir::TempDir;

    use super::*;
    use crate::tokenize::TextTokenizer;

    const TINY_TOKENIZER_JSON: &str = r#"{
  "version": "1.0",
  "truncation": null,
  "padding": null,
  "added_tokens": [],
  "normalizer": null,
  "pre_tokenizer": {"type": "Whitespace"},
  "post_processor": null,
  "decoder": null,
  "model": {
    "type": "WordLevel",
    "vocab": {"<unk>": 0, "<pad>": 1, "<s>": 2, "</s>": 3, "hello": 4, "world": 5},
    "unk_token": "<unk>"
  }
}"#;

    struct FixedLoader {
        path: PathBuf,
        requested: Vec<KeyedResource>,
    }

    impl ResourceLoader for FixedLoader {
        fn load_resource_path(
            &mut self,
            resource: &KeyedResource,
        ) -> WSResult<PathBuf> {
            self.requested.push(resource.clone());
            Ok(self.path.clone())
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(
            PretrainedTokenizer::by_name("kogpt2").unwrap(),
            PretrainedTokenizer::KoGpt2
        );
        assert_eq!(
            PretrainedTokenizer::by_name("skt/kogpt2-base-v2").unwrap(),
            PretrainedTokenizer::KoGpt2
        );
        assert!(PretrainedTokenizer::by_name("gpt5").is_err());
        assert_eq!(list_pretrained(), vec!["kogpt2".to_string()]);
    }

    #[test]
    fn test_load() -> WSResult<()> {
        let tmp = TempDir::new("wordsieve-pretrained")?;
        let path = tmp.path().join("tokenizer.json");
        std::fs::write(&path, TINY_TOKENIZER_JSON)?;

        let mut loader = FixedLoader {
            path,
            requested: Vec::new(),
        };
        let (tokenizer, vocab) = PretrainedTokenizer::KoGpt2.load::<u32>(&mut loader)?;

        assert_eq!(loader.requested, vec![KeyedResource::from(KOGPT2_TOKENIZER_RESOURCE)]);
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.token_to_id("world")?, 5);
        assert_eq!(tokenizer.tokenize("hello world")?, vec!["hello", "world"]);
        Ok(())
    }
}
