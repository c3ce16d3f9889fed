use crate::language::Language;
use crate::storage::STORAGE_KEY;

/// Mount-time settings for a [`LanguageStore`](super::LanguageStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key of the persisted entry.
    pub storage_key: String,
    /// Value used when storage holds nothing usable.
    pub default_language: Language,
}

impl StoreConfig {
    /// Persist under `key` instead of `"bl-lang"`.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Fall back to `lang` instead of French.
    pub fn with_default_language(mut self, lang: Language) -> Self {
        self.default_language = lang;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_language: Language::default(),
        }
    }
}
