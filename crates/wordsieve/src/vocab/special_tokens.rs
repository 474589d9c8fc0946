//! # Special Tokens

/// Unknown word token.
pub const UNK_TOKEN: &str = "<unk>";
/// Padding token.
pub const PAD_TOKEN: &str = "<pad>";
/// Beginning-of-sequence token.
pub const BOS_TOKEN: &str = "<s>";
/// End-of-sequence token.
pub const EOS_TOKEN: &str = "</s>";

/// The role a special token plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SpecialRole {
    /// Stands in for out-of-vocabulary tokens.
    Unknown,

    /// Fills sequences up to a common length.
    Padding,

    /// Marks the beginning of a sequence.
    Begin,

    /// Marks the end of a sequence.
    End,
}

impl SpecialRole {
    /// All roles, in vocabulary order.
    pub const ALL: [SpecialRole; 4] = [Self::Unknown, Self::Padding, Self::Begin, Self::End];
}

/// The reserved token strings of a vocabulary.
///
/// Each role is optional; a classifier label vocabulary has none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecialTokens {
    /// Unknown word token.
    pub unk: Option<String>,

    /// Padding token.
    pub pad: Option<String>,

    /// Beginning-of-sequence token.
    pub bos: Option<String>,

    /// End-of-sequence token.
    pub eos: Option<String>,
}

impl SpecialTokens {
    /// No special tokens.
    pub fn none() -> Self {
        Self::default()
    }

    /// `<unk>` and `<pad>`; the word-level classifier defaults.
    pub fn classifier() -> Self {
        Self {
            unk: Some(UNK_TOKEN.to_string()),
            pad: Some(PAD_TOKEN.to_string()),
            ..Self::default()
        }
    }

    /// `<unk>`, `<pad>`, `<s>` and `</s>`; the language-model defaults.
    pub fn language_model() -> Self {
        Self {
            bos: Some(BOS_TOKEN.to_string()),
            eos: Some(EOS_TOKEN.to_string()),
            ..Self::classifier()
        }
    }

    /// Set the token for a role.
    pub fn with_role<S: Into<String>>(
        mut self,
        role: SpecialRole,
        token: Option<S>,
    ) -> Self {
        let token = token.map(Into::into);
        match role {
            SpecialRole::Unknown => self.unk = token,
            SpecialRole::Padding => self.pad = token,
            SpecialRole::Begin => self.bos = token,
            SpecialRole::End => self.eos = token,
        }
        self
    }

    /// Get the token for a role.
    pub fn get(
        &self,
        role: SpecialRole,
    ) -> Option<&str> {
        match role {
            SpecialRole::Unknown => self.unk.as_deref(),
            SpecialRole::Padding => self.pad.as_deref(),
            SpecialRole::Begin => self.bos.as_deref(),
            SpecialRole::End => self.eos.as_deref(),
        }
    }

    /// The configured tokens in `unk, pad, bos, eos` order, without duplicates.
    pub fn ordered(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = Vec::with_capacity(4);
        for role in SpecialRole::ALL {
            if let Some(token) = self.get(role)
                && !tokens.contains(&token)
            {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Is `token` one of the configured special tokens?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        SpecialRole::ALL
            .iter()
            .any(|&role| self.get(role) == Some(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(SpecialTokens::none().ordered().is_empty());
        assert_eq!(SpecialTokens::classifier().ordered(), vec!["<unk>", "<pad>"]);
        assert_eq!(
            SpecialTokens::language_model().ordered(),
            vec!["<unk>", "<pad>", "<s>", "</s>"]
        );
    }

    #[test]
    fn test_dedup_and_roles() {
        let specials = SpecialTokens::classifier()
            .with_role(SpecialRole::Begin, Some("<unk>"))
            .with_role(SpecialRole::End, Some("<eos>"))
            .with_role::<&str>(SpecialRole::Padding, None);

        assert_eq!(specials.ordered(), vec!["<unk>", "<eos>"]);
        assert_eq!(specials.get(SpecialRole::Begin), Some("<unk>"));
        assert!(specials.contains("<eos>"));
        assert!(!specials.contains("<pad>"));
        assert_eq!(SpecialRole::Padding.to_string(), "padding");
    }
}
