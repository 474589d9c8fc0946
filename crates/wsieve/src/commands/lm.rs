use std::{io::Write, path::Path};

use wordsieve::{
    data::{DEFAULT_MAX_SEQ_LEN, DEFAULT_MIN_SEQ_LEN, LengthWindow, LmDataset},
    tokenize::join_pieces,
    vocab::{
        SpecialTokens,
        TokenVocab,
        VocabBuilderOptions,
        io::{load_piece_vocab_path, load_token_list_path},
    },
};

use crate::{
    input_output::{CsvInputArgs, OutputArgs},
    logging::{LogArgs, Verbosity},
    tokenizer_selector::TokenizerSelectorArgs,
};

/// Args for the lm command.
#[derive(clap::Args, Debug)]
pub struct LmArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: CsvInputArgs,

    #[command(flatten)]
    tokenizer: TokenizerSelectorArgs,

    /// Vocabulary file: a token list, or a sentencepiece ``.vocab``.
    ///
    /// Defaults to the subword tokenizer's own vocabulary, or else a
    /// vocabulary built over the input.
    #[arg(long)]
    vocab: Option<String>,

    /// Minimum sequence length, boundary tokens included.
    #[arg(long, default_value_t = DEFAULT_MIN_SEQ_LEN)]
    min_len: usize,

    /// Maximum sequence length, boundary tokens included.
    #[arg(long, default_value_t = DEFAULT_MAX_SEQ_LEN)]
    max_len: usize,

    // Retained sequences, as JSON lines of ids.
    #[command(flatten)]
    output: OutputArgs,
}

impl LmArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(Verbosity::Progress)?;

        let window = LengthWindow::new(self.min_len, self.max_len)?;
        let texts = self.input.read_texts()?;

        let specials = SpecialTokens::language_model();
        let selected = self.tokenizer.load(specials.clone())?;
        let subword = selected.vocab.is_some();

        let vocab: TokenVocab<u32> = match (&self.vocab, selected.vocab) {
            (Some(path), _) => load_vocab_file(path, specials)?,
            (None, Some(vocab)) => vocab,
            (None, None) => {
                let tokenized = selected.tokenizer.tokenize_batch(&texts)?;
                VocabBuilderOptions::default()
                    .with_specials(specials)
                    .build_from_samples(tokenized)?
            }
        };
        log::info!("vocab size: {}", vocab.len());

        let dataset = LmDataset::from_texts(&texts, &selected.tokenizer, &vocab, window)?;
        let stats = dataset.stats();
        println!(
            "sequences: {} kept of {} ({} too short, {} too long; window {}..={})",
            stats.kept,
            stats.total,
            stats.too_short,
            stats.too_long,
            window.min(),
            window.max()
        );
        if let Some(seq) = dataset.get(0) {
            let text = if subword {
                join_pieces(&vocab.decode_tokens(seq)?)
            } else {
                vocab.decode(seq)?
            };
            let preview: String = text.chars().take(80).collect();
            println!("first sequence: {} ids: {preview}", seq.len());
        }

        if let Some(mut writer) = self.output.open_optional_writer()? {
            for seq in dataset.iter() {
                serde_json::to_writer(&mut writer, seq)?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }

        Ok(())
    }
}

fn load_vocab_file(
    path: &str,
    specials: SpecialTokens,
) -> Result<TokenVocab<u32>, Box<dyn std::error::Error>> {
    log::info!("loading vocab: {path}");
    let vocab = if Path::new(path).extension().is_some_and(|ext| ext == "vocab") {
        load_piece_vocab_path(path, specials)?
    } else {
        load_token_list_path(path, specials)?
    };
    Ok(vocab)
}
