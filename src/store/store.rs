use super::StoreConfig;
use crate::language::Language;
use crate::signal::{Signal, Subscription};
use crate::storage::Storage;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

struct StoreInner {
    lang: Signal<Language>,
    storage: Box<dyn Storage>,
    key: String,
    // Serializes the memory write with its storage write.
    write_lock: Mutex<()>,
}

impl StoreInner {
    /// Best-effort write; failures are logged and dropped.
    fn persist(&self, lang: Language) {
        match self.storage.set_item(&self.key, lang.code()) {
            Ok(()) => tracing::trace!(key = %self.key, %lang, "persisted language"),
            Err(err) => tracing::debug!(key = %self.key, %lang, %err, "failed to persist language"),
        }
    }

    /// Memory and storage are both written before any subscriber runs, so a
    /// subscriber that calls the setter again has the last word in both.
    fn set_lang(&self, lang: Language) {
        let changed = {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            let previous = self.lang.replace(lang);
            self.persist(lang);
            previous != lang
        };
        if changed {
            self.lang.notify();
        }
    }
}

/// The display-language preference shared by a UI tree.
///
/// Mounting reads the persisted entry once, falls back to the default when it
/// is missing, invalid or unreadable, then writes the resolved value back.
/// Storage failures are never surfaced.
///
/// Clones are handles to the same store. The in-memory value is discarded when
/// the last handle is dropped; storage is left as is.
///
/// # Examples
///
/// ```
/// use langcell::storage::{MemoryStorage, Storage};
/// use langcell::{Language, LanguageStore};
/// use std::sync::Arc;
///
/// let storage = Arc::new(MemoryStorage::new());
/// let store = LanguageStore::mount(storage.clone());
/// assert_eq!(store.lang(), Language::Fr);
/// assert_eq!(storage.get_item("bl-lang").unwrap().as_deref(), Some("fr"));
///
/// store.set_lang(Language::En);
/// assert_eq!(store.lang(), Language::En);
/// assert_eq!(storage.get_item("bl-lang").unwrap().as_deref(), Some("en"));
/// ```
#[derive(Clone)]
pub struct LanguageStore {
    inner: Arc<StoreInner>,
}

impl LanguageStore {
    /// Mount a store over `storage` using the default key and language.
    pub fn mount<S: Storage + 'static>(storage: S) -> Self {
        Self::mount_with_config(storage, StoreConfig::default())
    }

    /// Mount a store over `storage` with an explicit key and default.
    pub fn mount_with_config<S: Storage + 'static>(storage: S, config: StoreConfig) -> Self {
        let StoreConfig {
            storage_key,
            default_language,
        } = config;

        let initial = read_persisted(&storage, &storage_key).unwrap_or(default_language);
        let inner = StoreInner {
            lang: Signal::new(initial),
            storage: Box::new(storage),
            key: storage_key,
            write_lock: Mutex::new(()),
        };

        // One-shot reconciliation so storage is populated after first load.
        inner.persist(initial);

        Self {
            inner: Arc::new(inner),
        }
    }

    /// The current language.
    pub fn lang(&self) -> Language {
        self.inner.lang.get()
    }

    /// Replace the current language and persist it.
    ///
    /// Subscribers are notified when the value changes. The write to storage
    /// is attempted every time.
    pub fn set_lang(&self, lang: Language) {
        self.inner.set_lang(lang);
    }

    /// Switch to the other language and return it.
    pub fn toggle(&self) -> Language {
        let next = self.lang().toggled();
        self.set_lang(next);
        next
    }

    /// A setter bound to this store that does not keep it alive.
    pub fn setter(&self) -> LanguageSetter {
        LanguageSetter {
            target: Some(Arc::downgrade(&self.inner)),
        }
    }

    /// Snapshot of the current value with a setter.
    pub fn preference(&self) -> LanguagePreference {
        LanguagePreference {
            lang: self.lang(),
            set_lang: self.setter(),
        }
    }

    /// Call `callback` whenever the language changes.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Language) + Send + Sync + 'static,
    {
        self.inner.lang.subscribe(move |lang| callback(*lang))
    }

    /// Key of the persisted entry this store mirrors.
    pub fn storage_key(&self) -> &str {
        &self.inner.key
    }

    /// Whether both handles point at the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("lang", &self.lang())
            .field("key", &self.inner.key)
            .finish_non_exhaustive()
    }
}

fn read_persisted<S: Storage + ?Sized>(storage: &S, key: &str) -> Option<Language> {
    match storage.get_item(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(lang) => Some(lang),
            Err(err) => {
                tracing::debug!(key, %err, "ignoring stored language");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::debug!(key, %err, "failed to read stored language");
            None
        }
    }
}

/// Replaces the language of the store it was taken from.
///
/// A setter whose store has been dropped, or one obtained outside any
/// provider, does nothing.
#[derive(Clone, Default)]
pub struct LanguageSetter {
    target: Option<Weak<StoreInner>>,
}

impl LanguageSetter {
    /// A setter that ignores every call.
    pub fn noop() -> Self {
        Self::default()
    }

    /// Replace the language of the bound store, if it is still alive.
    pub fn set(&self, lang: Language) {
        match self.target.as_ref().and_then(Weak::upgrade) {
            Some(inner) => inner.set_lang(lang),
            None => tracing::trace!(%lang, "language setter has no store"),
        }
    }

    /// Whether calling [`set`](Self::set) would reach a live store.
    pub fn is_bound(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.strong_count() > 0)
    }
}

impl fmt::Debug for LanguageSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageSetter")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// The value consumers receive: the current language and a way to change it.
///
/// The default is French with a no-op setter, which is what consumers see
/// before any store is provided.
#[derive(Debug, Clone, Default)]
pub struct LanguagePreference {
    pub lang: Language,
    pub set_lang: LanguageSetter,
}
