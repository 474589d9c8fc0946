use wordsieve::{
    pretrained::PretrainedTokenizer,
    tokenize::{HfTokenizer, TextTokenizer, TokenizerKind},
    vocab::{SpecialTokens, TokenVocab, io::vocab_from_hf_tokenizer},
};

use crate::disk_cache::DiskCacheArgs;

/// Tokenizer selection arg group.
///
/// Subword tokenizers bring their own vocabulary.
#[derive(clap::Args, Debug)]
pub struct TokenizerSelectorArgs {
    /// Word tokenizer: ``basic_english`` or ``whitespace``.
    #[arg(long, default_value = "basic_english")]
    tokenizer: TokenizerKind,

    /// Subword tokenizer from a ``tokenizer.json`` file.
    #[arg(long, conflicts_with = "pretrained")]
    hf_tokenizer: Option<String>,

    /// Named pretrained subword tokenizer (e.g. kogpt2).
    #[arg(long)]
    pretrained: Option<String>,

    #[command(flatten)]
    disk_cache: DiskCacheArgs,
}

/// A loaded tokenizer, and its vocabulary when it has one.
pub struct SelectedTokenizer {
    pub tokenizer: Box<dyn TextTokenizer>,
    pub vocab: Option<TokenVocab<u32>>,
}

impl TokenizerSelectorArgs {
    /// Load the selected tokenizer; `specials` apply to subword vocabularies.
    pub fn load(
        &self,
        specials: SpecialTokens,
    ) -> Result<SelectedTokenizer, Box<dyn std::error::Error>> {
        if let Some(name) = &self.pretrained {
            let model = PretrainedTokenizer::by_name(name)?;
            let mut disk_cache = self.disk_cache.init_disk_cache()?;
            let (tokenizer, vocab) = model.load(&mut disk_cache)?;
            return Ok(SelectedTokenizer {
                tokenizer: Box::new(tokenizer),
                vocab: Some(vocab),
            });
        }

        if let Some(path) = &self.hf_tokenizer {
            log::info!("loading tokenizer from {path}");
            let tokenizer = HfTokenizer::from_file(path)?;
            let vocab = vocab_from_hf_tokenizer(&tokenizer, specials)?;
            return Ok(SelectedTokenizer {
                tokenizer: Box::new(tokenizer),
                vocab: Some(vocab),
            });
        }

        log::debug!("using {} tokenizer", self.tokenizer);
        Ok(SelectedTokenizer {
            tokenizer: self.tokenizer.build(),
            vocab: None,
        })
    }
}
