use crate::error::AliasError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Fixed prefix every alias starts with.
pub const ALIAS_PREFIX: &str = "short.ly/";

/// Number of characters following [`ALIAS_PREFIX`].
pub const TOKEN_LENGTH: usize = 6;

/// Base-36 alphabet used for alias tokens.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A generated short alias such as `short.ly/k3x9qa`.
///
/// Aliases are opaque tokens: they are never dereferenced and carry no
/// uniqueness guarantee. The only invariant is the textual format
/// `short.ly/[a-z0-9]{6}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alias(String);

impl Alias {
    /// Parses a full alias, prefix included.
    pub fn parse(alias: impl Into<String>) -> Result<Self, AliasError> {
        let alias = alias.into();
        let Some(token) = alias.strip_prefix(ALIAS_PREFIX) else {
            return Err(AliasError::MissingPrefix {
                prefix: ALIAS_PREFIX,
                alias,
            });
        };
        Self::validate_token(token)?;
        Ok(Self(alias))
    }

    /// Builds an alias from its 6-character token.
    pub fn from_token(token: &str) -> Result<Self, AliasError> {
        Self::validate_token(token)?;
        Ok(Self(format!("{ALIAS_PREFIX}{token}")))
    }

    /// Builds an alias from a token without validation.
    ///
    /// Use this only for tokens produced by trusted internal sources
    /// (e.g. generators drawing from [`ALPHABET`]).
    pub fn from_token_unchecked(token: &str) -> Self {
        Self(format!("{ALIAS_PREFIX}{token}"))
    }

    /// Returns the whole alias, prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token part of the alias, without the prefix.
    pub fn token(&self) -> &str {
        &self.0[ALIAS_PREFIX.len()..]
    }

    fn validate_token(token: &str) -> Result<(), AliasError> {
        let len = token.chars().count();
        if len != TOKEN_LENGTH {
            return Err(AliasError::InvalidLength {
                expected: TOKEN_LENGTH,
                actual: len,
            });
        }

        if !token.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(AliasError::InvalidCharacters(token.to_string()));
        }

        Ok(())
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Alias {
    type Error = AliasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Alias> for String {
    fn from(value: Alias) -> Self {
        value.0
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
