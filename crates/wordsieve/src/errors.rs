//! # Error Types

/// Errors from wordsieve operations.
#[derive(Debug, thiserror::Error)]
pub enum WordsieveError {
    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A named column is not present in the header row.
    #[error("column {name:?} not found in header {header:?}")]
    MissingColumn {
        /// The requested column.
        name: String,

        /// The header that was searched.
        header: Vec<String>,
    },

    /// A data row does not have the expected shape.
    #[error("malformed row {row}: {reason}")]
    MalformedRow {
        /// The 1-based data row (excluding the header).
        row: usize,

        /// What was wrong with it.
        reason: String,
    },

    /// The label was not seen when the label vocabulary was built.
    #[error("unknown label: {0:?}")]
    UnknownLabel(String),

    /// The token is out of vocabulary and the vocabulary has no unknown token.
    #[error("unknown token: {0:?}")]
    UnknownToken(String),

    /// A required special token is not configured, or not in the vocabulary.
    #[error("missing special token: {0}")]
    MissingSpecialToken(String),

    /// Token id out of range for the vocabulary or the target id type.
    #[error("token id {id} out of range (size {size})")]
    TokenOutOfRange {
        /// The offending id.
        id: usize,

        /// The vocabulary size or id type capacity.
        size: usize,
    },

    /// Split ratios are not in `(0, 1)` or do not sum to 1.
    #[error("invalid split ratio: {0}")]
    InvalidSplitRatio(String),

    /// `min_len > max_len`.
    #[error("invalid length window: {min}..={max}")]
    InvalidLengthWindow {
        /// The lower bound.
        min: usize,

        /// The upper bound.
        max: usize,
    },

    /// Batch size must be at least 1.
    #[error("invalid batch size: {0}")]
    InvalidBatchSize(usize),

    /// Bucketing pool factor must be at least 1.
    #[error("invalid pool factor: {0}")]
    InvalidPoolFactor(usize),

    /// A planned batch index does not address the collated dataset.
    #[error("example index {index} out of range (dataset size {len})")]
    ExampleOutOfRange {
        /// The offending index.
        index: usize,

        /// The dataset size.
        len: usize,
    },

    /// The vocabulary would be empty.
    #[error("empty vocabulary")]
    EmptyVocab,

    /// Error from a wrapped tokenizer.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Parse error (vocab files, scores, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for wordsieve operations.
pub type WSResult<T> = core::result::Result<T, WordsieveError>;
