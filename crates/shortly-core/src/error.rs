use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias must start with '{prefix}': '{alias}'")]
    MissingPrefix { prefix: &'static str, alias: String },
    #[error("alias token must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("alias token must contain only lowercase letters and digits: '{0}'")]
    InvalidCharacters(String),
}
