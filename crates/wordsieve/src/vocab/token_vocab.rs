//! # Token Vocabulary

use crate::{
    errors::{WSResult, WordsieveError},
    types::{TokenType, WSHashMap, hash_map_new, token_to_index, try_token_from_index},
    vocab::{SpecialRole, SpecialTokens},
};

/// Bidirectional token string <-> id mapping.
///
/// Ids are dense: the id of a token is its position in [`Self::tokens`].
/// Out-of-vocabulary lookups resolve to the unknown token, when configured.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType = u32> {
    itos: Vec<String>,
    stoi: WSHashMap<String, T>,
    specials: SpecialTokens,
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a vocabulary from an ordered token list.
    ///
    /// Every configured special token must appear in `tokens`.
    /// Duplicate tokens keep their first id.
    pub fn from_tokens<I, S>(
        tokens: I,
        specials: SpecialTokens,
    ) -> WSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let itos: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if itos.is_empty() {
            return Err(WordsieveError::EmptyVocab);
        }

        let mut stoi = hash_map_new();
        for (idx, token) in itos.iter().enumerate() {
            let id: T = try_token_from_index(idx)?;
            stoi.entry(token.clone()).or_insert(id);
        }

        for special in specials.ordered() {
            if !stoi.contains_key(special) {
                return Err(WordsieveError::MissingSpecialToken(special.to_string()));
            }
        }

        Ok(Self {
            itos,
            stoi,
            specials,
        })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.itos.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }

    /// The tokens, in id order.
    pub fn tokens(&self) -> &[String] {
        &self.itos
    }

    /// The configured special tokens.
    pub fn specials(&self) -> &SpecialTokens {
        &self.specials
    }

    /// Does the vocabulary contain `token` (without unknown fallback)?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.stoi.contains_key(token)
    }

    /// The id of a special role, if configured.
    pub fn special_id(
        &self,
        role: SpecialRole,
    ) -> Option<T> {
        self.specials
            .get(role)
            .and_then(|token| self.stoi.get(token).copied())
    }

    /// The id of a special role, or [`WordsieveError::MissingSpecialToken`].
    pub fn try_special_id(
        &self,
        role: SpecialRole,
    ) -> WSResult<T> {
        self.special_id(role)
            .ok_or_else(|| WordsieveError::MissingSpecialToken(role.to_string()))
    }

    /// Look up a token, without unknown fallback.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<T> {
        self.stoi.get(token).copied()
    }

    /// Look up a token, falling back to the unknown token.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> WSResult<T> {
        match self.lookup(token) {
            Some(id) => Ok(id),
            None => self
                .special_id(SpecialRole::Unknown)
                .ok_or_else(|| WordsieveError::UnknownToken(token.to_string())),
        }
    }

    /// Look up the token for an id.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> WSResult<&str> {
        let idx = token_to_index(id);
        self.itos
            .get(idx)
            .map(String::as_str)
            .ok_or(WordsieveError::TokenOutOfRange {
                id: idx,
                size: self.len(),
            })
    }

    /// Encode tokens into ids.
    pub fn encode<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> WSResult<Vec<T>> {
        tokens
            .iter()
            .map(|token| self.token_to_id(token.as_ref()))
            .collect()
    }

    /// Decode ids into their tokens; nothing is dropped.
    pub fn decode_tokens(
        &self,
        ids: &[T],
    ) -> WSResult<Vec<&str>> {
        ids.iter().map(|&id| self.id_to_token(id)).collect()
    }

    /// Decode ids into space-joined text.
    ///
    /// Padding and sequence boundary tokens are dropped.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> WSResult<String> {
        let skip = [
            self.special_id(SpecialRole::Padding),
            self.special_id(SpecialRole::Begin),
            self.special_id(SpecialRole::End),
        ];

        let mut words: Vec<&str> = Vec::with_capacity(ids.len());
        for &id in ids {
            if skip.contains(&Some(id)) {
                continue;
            }
            words.push(self.id_to_token(id)?);
        }
        Ok(words.join(" "))
    }

    /// Convert to a different id type.
    pub fn to_token_type<G: TokenType>(&self) -> WSResult<TokenVocab<G>> {
        TokenVocab::from_tokens(self.itos.iter().cloned(), self.specials.clone())
    }
}
