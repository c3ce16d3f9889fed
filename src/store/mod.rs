//! The language preference store.
//!
//! A [`LanguageStore`] owns the current [`Language`](crate::Language), keeps
//! it in a [`Signal`](crate::signal::Signal) for subscribers, and mirrors it to
//! a [`Storage`](crate::storage::Storage) on a best-effort basis.

mod config;
mod store;

pub use config::StoreConfig;
pub use store::{LanguagePreference, LanguageSetter, LanguageStore};
