use wordsieve::{
    data::TextFieldOptions,
    tokenize::TokenizerKind,
    vocab::{SpecialTokens, TokenVocab, VocabBuilderOptions, io::write_token_list},
};

use crate::{
    input_output::{CsvInputArgs, OutputArgs},
    logging::{LogArgs, Verbosity},
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: CsvInputArgs,

    /// Word tokenizer.
    #[arg(long, default_value = "basic_english")]
    tokenizer: TokenizerKind,

    /// Minimum token count.
    #[arg(long, default_value_t = 1)]
    min_freq: usize,

    /// Maximum vocabulary size, excluding specials.
    #[arg(long)]
    max_size: Option<usize>,

    /// Include the ``<s>``/``</s>`` boundary tokens.
    #[arg(long)]
    boundary_tokens: bool,

    // Token list output; stdout when unset.
    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(Verbosity::Progress)?;

        let texts = self.input.read_texts()?;
        let field = TextFieldOptions::default().init(self.tokenizer.build());
        let tokenized = field.preprocess_batch(&texts)?;

        let specials = if self.boundary_tokens {
            SpecialTokens::language_model()
        } else {
            SpecialTokens::classifier()
        };
        let vocab: TokenVocab<u32> = VocabBuilderOptions::default()
            .with_min_freq(self.min_freq)
            .with_max_size(self.max_size)
            .with_specials(specials)
            .build_from_samples(tokenized)?;
        log::info!("vocab size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_token_list(&vocab, &mut writer)?;

        Ok(())
    }
}
