//! # Raw Examples

use serde::{Deserialize, Serialize};

/// A free-text example with a categorical label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledExample {
    /// The raw text.
    pub text: String,

    /// The raw label.
    pub label: String,
}

impl LabeledExample {
    /// Create a new example.
    pub fn new<S: Into<String>, L: Into<String>>(
        text: S,
        label: L,
    ) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Anything with a categorical label; used for stratified splits.
pub trait Labeled {
    /// The raw label.
    fn label(&self) -> &str;
}

impl Labeled for LabeledExample {
    fn label(&self) -> &str {
        &self.label
    }
}

/// A tokenized example with its raw label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenizedExample {
    /// The preprocessed tokens.
    pub tokens: Vec<String>,

    /// The raw label.
    pub label: String,
}

impl Labeled for TokenizedExample {
    fn label(&self) -> &str {
        &self.label
    }
}
