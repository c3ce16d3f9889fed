use super::Storage;
use crate::error::{Result, StorageError};

/// A medium that cannot be reached, such as browser storage when no browser
/// is present. Every access fails.
#[derive(Debug, Clone, Default)]
pub struct UnavailableStorage {
    reason: Option<String>,
}

impl UnavailableStorage {
    /// Unavailable with a generic reason.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unavailable, reporting `reason` in every error.
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    fn error(&self) -> StorageError {
        StorageError::Unavailable(
            self.reason
                .clone()
                .unwrap_or_else(|| "no storage backend".to_string()),
        )
    }
}

impl Storage for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(self.error())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_access_fails() {
        let storage = UnavailableStorage::with_reason("headless");
        let err = storage.get_item("bl-lang").unwrap_err();
        assert_eq!(err.to_string(), "storage is unavailable: headless");
        assert!(storage.set_item("bl-lang", "fr").is_err());
    }
}
