use wordsieve::{
    batching::BatchCollator,
    data::{
        ClassificationOptions,
        ClassificationPipeline,
        DEFAULT_FIX_LENGTH,
        DEFAULT_SPLIT_RATIO,
        SplitOptions,
        SplitRatio,
        TextFieldOptions,
    },
    tokenize::TokenizerKind,
    vocab::{VocabBuilderOptions, io::save_token_list_path},
};

use crate::logging::{LogArgs, Verbosity};

/// Args for the classify command.
#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Training CSV (``text,label`` rows).
    #[arg(long, default_value = "../data/binary_train.csv")]
    train: String,

    /// Test CSV (``text,label`` rows).
    #[arg(long, default_value = "../data/binary_test.csv")]
    test: String,

    /// Word tokenizer.
    #[arg(long, default_value = "basic_english")]
    tokenizer: TokenizerKind,

    /// Examples per batch.
    #[arg(long, default_value_t = 64)]
    batch_size: usize,

    /// Tokens per row, after truncation and padding.
    #[arg(long, default_value_t = DEFAULT_FIX_LENGTH)]
    fix_length: usize,

    /// Fraction of the training CSV kept for training; the rest validates.
    #[arg(long, default_value_t = DEFAULT_SPLIT_RATIO)]
    split_ratio: f64,

    /// Preserve label proportions in the split.
    #[arg(long)]
    stratified: bool,

    /// Seed for the split and the batch shuffles; random when unset.
    #[arg(long)]
    seed: Option<u64>,

    /// Minimum token count for the text vocabulary.
    #[arg(long, default_value_t = 1)]
    min_freq: usize,

    /// Maximum text vocabulary size, excluding specials.
    #[arg(long)]
    max_size: Option<usize>,

    /// Write the text vocabulary here.
    #[arg(long)]
    vocab_out: Option<String>,

    /// Write the label vocabulary here.
    #[arg(long)]
    label_vocab_out: Option<String>,
}

impl ClassifyArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(Verbosity::Progress)?;

        let field = TextFieldOptions::default()
            .with_fix_length(Some(self.fix_length))
            .init(self.tokenizer.build());

        let seed = self.seed.unwrap_or_else(rand::random);
        let options = ClassificationOptions::default()
            .with_split(
                SplitOptions::default()
                    .with_ratio(SplitRatio::Holdout(self.split_ratio))
                    .with_stratified(self.stratified),
            )
            .with_vocab(
                VocabBuilderOptions::default()
                    .with_min_freq(self.min_freq)
                    .with_max_size(self.max_size),
            )
            .with_batch_size(self.batch_size)
            .with_seed(seed);
        log::info!("seed: {seed}");

        let pipeline: ClassificationPipeline<u32> =
            ClassificationPipeline::from_csv_paths(&self.train, &self.test, field, options)?;

        let sizes = pipeline.sizes();
        println!("Number of training examples: {}", sizes.train);
        println!("Number of validation examples: {}", sizes.valid);
        println!("Number of testing examples: {}", sizes.test);
        println!(
            "Unique tokens in TEXT vocabulary: {}",
            pipeline.text_vocab().len()
        );
        println!(
            "Unique tokens in LABEL vocabulary: {}",
            pipeline.label_vocab().len()
        );

        if let Some(example) = pipeline.train().first() {
            println!("First training example: {example:?}");
        }

        let mut train_iter = pipeline.train_iter()?;
        println!("Training batches per epoch: {}", train_iter.num_batches());
        if let Some(indices) = train_iter.epoch().first() {
            let batch = pipeline
                .collator()
                .collate_indices(pipeline.train(), indices)?;
            println!(
                "First batch: text [{} x {}], labels {:?}",
                batch.text.len(),
                batch.text.first().map_or(0, Vec::len),
                batch.labels
            );
            if let Some(row) = batch.text.first() {
                println!("First row: {}", pipeline.text_vocab().decode(row)?);
            }
        }

        if let Some(path) = &self.vocab_out {
            log::info!("writing text vocab: {path}");
            save_token_list_path(pipeline.text_vocab(), path)?;
        }
        if let Some(path) = &self.label_vocab_out {
            log::info!("writing label vocab: {path}");
            save_token_list_path(pipeline.label_vocab().as_token_vocab(), path)?;
        }

        Ok(())
    }
}
