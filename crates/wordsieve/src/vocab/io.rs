//! # Vocabulary IO
//!
//! ## Token List
//!
//! One token per line, in id order:
//! ```text
//! <unk>
//! <pad>
//! the
//! ```
//!
//! ## Sentencepiece ``.vocab``
//!
//! One ``piece<TAB>score`` entry per line, in id order;
//! as written by ``spm_train`` alongside the model.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WSResult, WordsieveError},
    types::TokenType,
    vocab::{SpecialTokens, TokenVocab},
};

/// Write a vocabulary as a token list.
pub fn write_token_list<T: TokenType, W: Write>(
    vocab: &TokenVocab<T>,
    writer: &mut W,
) -> WSResult<()> {
    for token in vocab.tokens() {
        writeln!(writer, "{token}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Save a vocabulary as a token list file.
pub fn save_token_list_path<T: TokenType, P: AsRef<Path>>(
    vocab: &TokenVocab<T>,
    path: P,
) -> WSResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_token_list(vocab, &mut writer)
}

/// Read a token list.
pub fn read_token_list<T: TokenType, R: BufRead>(
    reader: R,
    specials: SpecialTokens,
) -> WSResult<TokenVocab<T>> {
    let mut tokens = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.strip_suffix('\r').unwrap_or(&line);
        if token.is_empty() {
            return Err(WordsieveError::Parse(format!(
                "empty token on line {}",
                idx + 1
            )));
        }
        tokens.push(token.to_string());
    }
    TokenVocab::from_tokens(tokens, specials)
}

/// Load a token list file.
pub fn load_token_list_path<T: TokenType, P: AsRef<Path>>(
    path: P,
    specials: SpecialTokens,
) -> WSResult<TokenVocab<T>> {
    read_token_list(BufReader::new(File::open(path)?), specials)
}

/// Read a sentencepiece ``.vocab`` file; scores are validated and discarded.
pub fn read_piece_vocab<T: TokenType, R: BufRead>(
    reader: R,
    specials: SpecialTokens,
) -> WSResult<TokenVocab<T>> {
    let mut pieces = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let (piece, score) = line.rsplit_once('\t').ok_or_else(|| {
            WordsieveError::Parse(format!("line {}: expected piece<TAB>score", idx + 1))
        })?;
        score.parse::<f32>().map_err(|e| {
            WordsieveError::Parse(format!("line {}: bad score {score:?}: {e}", idx + 1))
        })?;
        pieces.push(piece.to_string());
    }
    TokenVocab::from_tokens(pieces, specials)
}

/// Load a sentencepiece ``.vocab`` file.
pub fn load_piece_vocab_path<T: TokenType, P: AsRef<Path>>(
    path: P,
    specials: SpecialTokens,
) -> WSResult<TokenVocab<T>> {
    read_piece_vocab(BufReader::new(File::open(path)?), specials)
}

/// Adopt the vocabulary of a ``tokenizer.json`` tokenizer.
///
/// The tokenizer's ids must be dense, starting at 0.
#[cfg(feature = "huggingface")]
pub fn vocab_from_hf_tokenizer<T: TokenType>(
    tokenizer: &crate::tokenize::HfTokenizer,
    specials: SpecialTokens,
) -> WSResult<TokenVocab<T>> {
    let pairs = tokenizer.vocab_pairs();
    for (idx, (piece, id)) in pairs.iter().enumerate() {
        if *id as usize != idx {
            return Err(WordsieveError::Parse(format!(
                "sparse tokenizer vocab: {piece:?} has id {id}, expected {idx}"
            )));
        }
    }
    TokenVocab::from_tokens(pairs.into_iter().map(|(piece, _)| piece), specials)
}
