//! # Text Field
//!
//! Turns raw text into fixed-shape id rows:
//! ``tokenize -> lowercase -> (bos) truncate (eos) pad -> numericalize``.

use crate::{
    errors::WSResult,
    tokenize::{TextTokenizer, TokenizerKind},
    types::TokenType,
    vocab::{PAD_TOKEN, SpecialTokens, TokenCounter, TokenVocab, UNK_TOKEN, VocabBuilderOptions},
};

/// The classifier's fixed sequence length.
pub const DEFAULT_FIX_LENGTH: usize = 50;

/// Options for [`TextField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldOptions {
    /// Lowercase tokens after tokenization.
    pub lower: bool,

    /// Pad/truncate every row to this many tokens, boundary tokens included;
    /// `None` pads to the longest row of each batch.
    pub fix_length: Option<usize>,

    /// Token prepended to every row.
    pub init_token: Option<String>,

    /// Token appended to every row.
    pub eos_token: Option<String>,

    /// Padding token.
    pub pad_token: String,

    /// Unknown token; `None` makes out-of-vocabulary tokens an error.
    pub unk_token: Option<String>,

    /// Pad on the left instead of the right.
    pub pad_first: bool,

    /// Truncate from the left instead of the right.
    pub truncate_first: bool,

    /// Report unpadded lengths alongside padded rows.
    pub include_lengths: bool,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self {
            lower: true,
            fix_length: Some(DEFAULT_FIX_LENGTH),
            init_token: None,
            eos_token: None,
            pad_token: PAD_TOKEN.to_string(),
            unk_token: Some(UNK_TOKEN.to_string()),
            pad_first: false,
            truncate_first: false,
            include_lengths: false,
        }
    }
}

impl TextFieldOptions {
    /// Set lowercasing.
    pub fn with_lower(
        self,
        lower: bool,
    ) -> Self {
        Self { lower, ..self }
    }

    /// Set the fixed length.
    pub fn with_fix_length(
        self,
        fix_length: Option<usize>,
    ) -> Self {
        Self { fix_length, ..self }
    }

    /// Set the boundary tokens.
    pub fn with_boundary_tokens(
        self,
        init_token: Option<String>,
        eos_token: Option<String>,
    ) -> Self {
        Self {
            init_token,
            eos_token,
            ..self
        }
    }

    /// Set left-padding.
    pub fn with_pad_first(
        self,
        pad_first: bool,
    ) -> Self {
        Self { pad_first, ..self }
    }

    /// Set left-truncation.
    pub fn with_truncate_first(
        self,
        truncate_first: bool,
    ) -> Self {
        Self {
            truncate_first,
            ..self
        }
    }

    /// Set length reporting.
    pub fn with_include_lengths(
        self,
        include_lengths: bool,
    ) -> Self {
        Self {
            include_lengths,
            ..self
        }
    }

    /// The vocabulary specials implied by these options.
    pub fn specials(&self) -> SpecialTokens {
        SpecialTokens {
            unk: self.unk_token.clone(),
            pad: Some(self.pad_token.clone()),
            bos: self.init_token.clone(),
            eos: self.eos_token.clone(),
        }
    }

    /// Build a [`TextField`] with the given tokenizer.
    pub fn init<K: TextTokenizer + 'static>(
        self,
        tokenizer: K,
    ) -> TextField {
        TextField {
            options: self,
            tokenizer: Box::new(tokenizer),
        }
    }
}

/// Padded rows, plus unpadded lengths when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedRows<V> {
    /// One row per example; all the same length.
    pub rows: Vec<Vec<V>>,

    /// Non-pad length of each row, when `include_lengths` is set.
    pub lengths: Option<Vec<usize>>,
}

/// A configured text preprocessing field.
pub struct TextField {
    options: TextFieldOptions,
    tokenizer: Box<dyn TextTokenizer>,
}

impl Default for TextField {
    fn default() -> Self {
        TextFieldOptions::default().init(TokenizerKind::BasicEnglish.build())
    }
}

impl TextField {
    /// The field options.
    pub fn options(&self) -> &TextFieldOptions {
        &self.options
    }

    fn postprocess_tokens(
        &self,
        tokens: Vec<String>,
    ) -> Vec<String> {
        if self.options.lower {
            tokens.into_iter().map(|t| t.to_lowercase()).collect()
        } else {
            tokens
        }
    }

    /// Tokenize (and lowercase) one text.
    pub fn preprocess(
        &self,
        text: &str,
    ) -> WSResult<Vec<String>> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        Ok(self.postprocess_tokens(self.tokenizer.tokenize(text)?))
    }

    /// Tokenize (and lowercase) a batch of texts, preserving order.
    pub fn preprocess_batch(
        &self,
        texts: &[String],
    ) -> WSResult<Vec<Vec<String>>> {
        let trimmed: Vec<String> = texts
            .iter()
            .map(|t| t.strip_suffix('\n').unwrap_or(t).to_string())
            .collect();
        Ok(self
            .tokenizer
            .tokenize_batch(&trimmed)?
            .into_iter()
            .map(|tokens| self.postprocess_tokens(tokens))
            .collect())
    }

    fn boundary_len(&self) -> usize {
        self.options.init_token.is_some() as usize + self.options.eos_token.is_some() as usize
    }

    /// The content length available once boundary tokens are placed.
    fn content_len<S: AsRef<[String]>>(
        &self,
        batch: &[S],
    ) -> usize {
        match self.options.fix_length {
            Some(fix_length) => fix_length.saturating_sub(self.boundary_len()),
            None => batch
                .iter()
                .map(|tokens| tokens.as_ref().len())
                .max()
                .unwrap_or(0),
        }
    }

    /// Truncate, add boundary tokens, and pad a batch of token rows.
    pub fn pad<S: AsRef<[String]>>(
        &self,
        batch: &[S],
    ) -> PaddedRows<String> {
        let opts = &self.options;
        let max_len = self.content_len(batch);
        let boundary = self.boundary_len();

        let mut rows = Vec::with_capacity(batch.len());
        let mut lengths = Vec::with_capacity(batch.len());
        for tokens in batch {
            let tokens = tokens.as_ref();
            let kept = if tokens.len() <= max_len {
                tokens
            } else if opts.truncate_first {
                &tokens[tokens.len() - max_len..]
            } else {
                &tokens[..max_len]
            };

            let mut body: Vec<String> = Vec::with_capacity(max_len + 2);
            body.extend(opts.init_token.iter().cloned());
            body.extend(kept.iter().cloned());
            body.extend(opts.eos_token.iter().cloned());

            // Boundary tokens alone can exceed a tiny fix_length.
            if let Some(fix_length) = opts.fix_length
                && body.len() > fix_length
            {
                if opts.truncate_first {
                    body = body.split_off(body.len() - fix_length);
                } else {
                    body.truncate(fix_length);
                }
            }
            lengths.push(body.len());

            let row_len = match opts.fix_length {
                Some(fix_length) => fix_length,
                None => max_len + boundary,
            };
            let padding = std::iter::repeat_n(opts.pad_token.clone(), row_len - body.len());
            let row: Vec<String> = if opts.pad_first {
                padding.chain(body).collect()
            } else {
                body.into_iter().chain(padding).collect()
            };
            rows.push(row);
        }

        PaddedRows {
            rows,
            lengths: opts.include_lengths.then_some(lengths),
        }
    }

    /// Map padded token rows to ids.
    pub fn numericalize<T: TokenType>(
        &self,
        padded: PaddedRows<String>,
        vocab: &TokenVocab<T>,
    ) -> WSResult<PaddedRows<T>> {
        let rows = padded
            .rows
            .iter()
            .map(|row| vocab.encode(row))
            .collect::<WSResult<Vec<_>>>()?;
        Ok(PaddedRows {
            rows,
            lengths: padded.lengths,
        })
    }

    /// [`Self::pad`] then [`Self::numericalize`].
    pub fn process<T: TokenType, S: AsRef<[String]>>(
        &self,
        batch: &[S],
        vocab: &TokenVocab<T>,
    ) -> WSResult<PaddedRows<T>> {
        self.numericalize(self.pad(batch), vocab)
    }

    /// Build a vocabulary over tokenized examples, with this field's specials.
    pub fn build_vocab<T, I, S>(
        &self,
        samples: I,
        options: &VocabBuilderOptions,
    ) -> WSResult<TokenVocab<T>>
    where
        T: TokenType,
        I: IntoIterator<Item = S>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut counter = TokenCounter::new();
        counter.update_from_samples(samples);
        options
            .clone()
            .with_specials(self.options.specials())
            .build(&counter)
    }
}
