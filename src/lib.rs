//! # Langcell
//!
//! The display-language preference of a UI tree, persisted across sessions.
//!
//! - [`Language`] - French (default) or English
//! - [`LanguageStore`] - the shared value and its setter, mirrored to storage
//! - [`context`] - scoped provision of the store to consumers
//! - [`storage`] - the persisted-entry boundary and its backends
//! - [`signal`] - the reactive cell underneath the store
//!
//! Storage is best effort: a missing, invalid or unreadable entry yields
//! `fr`, and failed writes leave the in-memory value updated. No storage error
//! ever reaches the caller.
//!
//! ```
//! use langcell::storage::MemoryStorage;
//! use langcell::{context, Language, LanguageStore};
//!
//! let store = LanguageStore::mount(MemoryStorage::new());
//! context::provide(&store, || {
//!     assert_eq!(context::use_language().lang, Language::Fr);
//!     context::use_language().set_lang.set(Language::En);
//!     assert_eq!(context::current_language(), Language::En);
//! });
//! ```

pub mod context;
pub mod error;
pub mod language;
pub mod signal;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use error::{ParseLanguageError, StorageError};
pub use language::Language;
pub use storage::{Storage, STORAGE_KEY};
pub use store::{LanguagePreference, LanguageSetter, LanguageStore, StoreConfig};
