//! Error types.

use thiserror::Error;

/// Failure to access the persisted-entry medium.
///
/// Backends return this; [`LanguageStore`](crate::LanguageStore) swallows it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode storage file: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("failed to encode storage file: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// A string that is not exactly `"fr"` or `"en"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code {0:?}")]
pub struct ParseLanguageError(pub String);

pub type Result<T, E = StorageError> = std::result::Result<T, E>;
