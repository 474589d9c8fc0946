//! # Classification Pipeline
//!
//! Loads labeled train/test corpora, holds out a validation split of the
//! training set, builds the text and label vocabularies over the training
//! split only, and plans batches for each split.

use std::path::Path;

use crate::{
    batching::{BatchIterator, BatchIteratorOptions, ClassificationCollator, DEFAULT_BATCH_SIZE},
    data::{
        DatasetSplit,
        LabeledExample,
        SplitOptions,
        TextField,
        TokenizedExample,
        read_labeled_csv_path,
        split_dataset,
    },
    errors::WSResult,
    types::TokenType,
    vocab::{LabelVocab, TokenVocab, VocabBuilderOptions},
};

/// Options for [`ClassificationPipeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOptions {
    /// How the training corpus is split into train/valid.
    pub split: SplitOptions,

    /// Text vocabulary options; specials come from the field.
    pub vocab: VocabBuilderOptions,

    /// Examples per batch.
    pub batch_size: usize,

    /// Batch shuffle seed.
    pub seed: u64,
}

impl Default for ClassificationOptions {
    fn default() -> Self {
        Self {
            split: SplitOptions::default(),
            vocab: VocabBuilderOptions::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            seed: 0,
        }
    }
}

impl ClassificationOptions {
    /// Set the split options.
    pub fn with_split(
        self,
        split: SplitOptions,
    ) -> Self {
        Self { split, ..self }
    }

    /// Set the vocabulary options.
    pub fn with_vocab(
        self,
        vocab: VocabBuilderOptions,
    ) -> Self {
        Self { vocab, ..self }
    }

    /// Set the batch size.
    pub fn with_batch_size(
        self,
        batch_size: usize,
    ) -> Self {
        Self { batch_size, ..self }
    }

    /// Seed both the split and the batch shuffles.
    pub fn with_seed(
        self,
        seed: u64,
    ) -> Self {
        Self {
            split: self.split.with_seed(Some(seed)),
            seed,
            ..self
        }
    }
}

/// Example counts per split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSizes {
    /// Training examples.
    pub train: usize,

    /// Validation examples.
    pub valid: usize,

    /// Test examples.
    pub test: usize,
}

/// Prepared classifier data: tokenized splits plus vocabularies.
pub struct ClassificationPipeline<T: TokenType = u32> {
    options: ClassificationOptions,
    field: TextField,
    text_vocab: TokenVocab<T>,
    label_vocab: LabelVocab<T>,
    splits: DatasetSplit<TokenizedExample>,
}

fn tokenize_examples(
    field: &TextField,
    examples: Vec<LabeledExample>,
) -> WSResult<Vec<TokenizedExample>> {
    let (texts, labels): (Vec<String>, Vec<String>) =
        examples.into_iter().map(|e| (e.text, e.label)).unzip();
    let tokenized = field.preprocess_batch(&texts)?;
    Ok(tokenized
        .into_iter()
        .zip(labels)
        .map(|(tokens, label)| TokenizedExample { tokens, label })
        .collect())
}

impl<T: TokenType> ClassificationPipeline<T> {
    /// Prepare from in-memory corpora.
    ///
    /// The training corpus is split into train/valid; `test` is kept whole.
    pub fn from_examples(
        train: Vec<LabeledExample>,
        test: Vec<LabeledExample>,
        field: TextField,
        options: ClassificationOptions,
    ) -> WSResult<Self> {
        let train = tokenize_examples(&field, train)?;
        let test = tokenize_examples(&field, test)?;

        let split = split_dataset(train, &options.split)?;
        let splits = DatasetSplit {
            train: split.train,
            valid: split.valid,
            test,
        };

        let text_vocab = field.build_vocab(
            splits.train.iter().map(|e| e.tokens.iter()),
            &options.vocab,
        )?;
        let label_vocab = LabelVocab::from_labels(splits.train.iter().map(|e| e.label.as_str()))?;

        log::info!(
            "classification data: train={} valid={} test={}; vocab={} classes={}",
            splits.train.len(),
            splits.valid.len(),
            splits.test.len(),
            text_vocab.len(),
            label_vocab.len()
        );

        Ok(Self {
            options,
            field,
            text_vocab,
            label_vocab,
            splits,
        })
    }

    /// Prepare from `text,label` CSV files.
    pub fn from_csv_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        train_path: P,
        test_path: Q,
        field: TextField,
        options: ClassificationOptions,
    ) -> WSResult<Self> {
        log::debug!(
            "loading {} and {}",
            train_path.as_ref().display(),
            test_path.as_ref().display()
        );
        let train = read_labeled_csv_path(train_path)?;
        let test = read_labeled_csv_path(test_path)?;
        Self::from_examples(train, test, field, options)
    }

    /// The options.
    pub fn options(&self) -> &ClassificationOptions {
        &self.options
    }

    /// The text field.
    pub fn field(&self) -> &TextField {
        &self.field
    }

    /// The text vocabulary, built on the training split.
    pub fn text_vocab(&self) -> &TokenVocab<T> {
        &self.text_vocab
    }

    /// The label vocabulary, built on the training split.
    pub fn label_vocab(&self) -> &LabelVocab<T> {
        &self.label_vocab
    }

    /// The training split.
    pub fn train(&self) -> &[TokenizedExample] {
        &self.splits.train
    }

    /// The validation split.
    pub fn valid(&self) -> &[TokenizedExample] {
        &self.splits.valid
    }

    /// The test corpus.
    pub fn test(&self) -> &[TokenizedExample] {
        &self.splits.test
    }

    /// Example counts per split.
    pub fn sizes(&self) -> SplitSizes {
        SplitSizes {
            train: self.splits.train.len(),
            valid: self.splits.valid.len(),
            test: self.splits.test.len(),
        }
    }

    /// A collator over this pipeline's field and vocabularies.
    pub fn collator(&self) -> ClassificationCollator<'_, T> {
        ClassificationCollator::new(&self.field, &self.text_vocab, &self.label_vocab)
    }

    fn iterator(
        &self,
        examples: &[TokenizedExample],
        preset: BatchIteratorOptions,
    ) -> WSResult<BatchIterator> {
        BatchIterator::from_examples(
            examples,
            |e| e.tokens.len(),
            preset
                .with_batch_size(self.options.batch_size)
                .with_seed(self.options.seed),
        )
    }

    /// Shuffled, bucketed batches over the training split.
    pub fn train_iter(&self) -> WSResult<BatchIterator> {
        self.iterator(&self.splits.train, BatchIteratorOptions::train())
    }

    /// Length-sorted batches over the validation split.
    pub fn valid_iter(&self) -> WSResult<BatchIterator> {
        self.iterator(&self.splits.valid, BatchIteratorOptions::eval())
    }

    /// In-order batches over the test corpus.
    pub fn test_iter(&self) -> WSResult<BatchIterator> {
        self.iterator(&self.splits.test, BatchIteratorOptions::sequential())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batching::{BatchCollator, collate_epoch};

    fn corpus(
        n: usize,
        label: &str,
    ) -> Vec<LabeledExample> {
        (0..n)
            .map(|i| LabeledExample::new(format!("The {label} Movie, number {i}!"), label))
            .collect()
    }

    fn pipeline() -> ClassificationPipeline<u32> {
        let mut train = corpus(30, "good");
        train.extend(corpus(20, "bad"));
        let test = corpus(7, "good");
        ClassificationPipeline::from_examples(
            train,
            test,
            TextField::default(),
            ClassificationOptions::default()
                .with_split(SplitOptions::default().with_stratified(true))
                .with_batch_size(8)
                .with_seed(42),
        )
        .unwrap()
    }

    #[test]
    fn test_pipeline_sizes_and_vocabs() {
        let pipeline = pipeline();
        assert_eq!(
            pipeline.sizes(),
            SplitSizes {
                train: 40,
                valid: 10,
                test: 7,
            }
        );

        let vocab = pipeline.text_vocab();
        assert_eq!(&vocab.tokens()[..2], &["<unk>", "<pad>"]);
        assert!(vocab.contains("movie"));
        assert!(vocab.contains(","));
        assert!(!vocab.contains("Movie"));

        assert_eq!(pipeline.label_vocab().labels(), &["good", "bad"]);
        assert!(pipeline.train()[0].tokens.len() > 3);
    }

    #[test]
    fn test_pipeline_batches() {
        let pipeline = pipeline();
        let collator = pipeline.collator();

        let mut train_iter = pipeline.train_iter().unwrap();
        assert_eq!(train_iter.num_batches(), 5);
        let batches = collate_epoch(&mut train_iter, pipeline.train(), &collator).unwrap();
        assert_eq!(batches.iter().map(|b| b.len()).sum::<usize>(), 40);
        for batch in &batches {
            assert!(batch.text.iter().all(|row| row.len() == 50));
        }

        let valid_iter = pipeline.valid_iter().unwrap();
        assert_eq!(valid_iter.plan(0), valid_iter.plan(1));

        let test_iter = pipeline.test_iter().unwrap();
        let first = test_iter.plan(0)[0].clone();
        assert_eq!(first, (0..7).collect::<Vec<_>>());
        let batch = collator.collate_indices(pipeline.test(), &first).unwrap();
        assert_eq!(batch.labels, vec![0; 7]);
    }
}
