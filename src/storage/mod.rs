//! The persisted-entry boundary.
//!
//! A [`Storage`] is a durable text key/value medium. Backends report every
//! access failure as a [`StorageError`]; deciding what to do about it is the
//! caller's business.

mod file;
mod memory;
mod unavailable;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use unavailable::UnavailableStorage;

use crate::error::Result;
use std::sync::Arc;

/// Key under which the display language is persisted.
pub const STORAGE_KEY: &str = "bl-lang";

/// A text key/value store scoped to one application.
pub trait Storage: Send + Sync {
    /// Read the value under `key`. `Ok(None)` means the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}
