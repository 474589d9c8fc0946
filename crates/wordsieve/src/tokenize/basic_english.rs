//! # Basic English Tokenizer

use regex::Regex;

use crate::{errors::WSResult, tokenize::TextTokenizer};

/// Ordered `(pattern, replacement)` normalization rules.
///
/// Applied after lowercasing; the result is split on whitespace.
pub const BASIC_ENGLISH_RULES: &[(&str, &str)] = &[
    (r"'", " '  "),
    (r#"""#, ""),
    (r"\.", " . "),
    (r"<br />", " "),
    (r",", " , "),
    (r"\(", " ( "),
    (r"\)", " ) "),
    (r"!", " ! "),
    (r"\?", " ? "),
    (r";", " "),
    (r":", " "),
    (r"\s+", " "),
];

/// Lowercasing word tokenizer which splits off common punctuation.
///
/// Drops double quotes, `;` and `:`, and html line breaks.
#[derive(Debug, Clone)]
pub struct BasicEnglishTokenizer {
    rules: Vec<(Regex, &'static str)>,
}

impl Default for BasicEnglishTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicEnglishTokenizer {
    /// Compile the [`BASIC_ENGLISH_RULES`].
    pub fn new() -> Self {
        let rules = BASIC_ENGLISH_RULES
            .iter()
            .map(|&(pattern, replacement)| {
                // The rule table is static; failure is a programming error.
                let re = Regex::new(pattern).expect("invalid basic english rule");
                (re, replacement)
            })
            .collect();
        Self { rules }
    }

    /// Apply the normalization rules, without splitting.
    pub fn normalize(
        &self,
        text: &str,
    ) -> String {
        let mut line = text.to_lowercase();
        for (re, replacement) in &self.rules {
            line = re.replace_all(&line, *replacement).into_owned();
        }
        line
    }
}

impl TextTokenizer for BasicEnglishTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> WSResult<Vec<String>> {
        Ok(self
            .normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }
}
