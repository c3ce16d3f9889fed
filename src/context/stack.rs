use crate::language::Language;
use crate::signal::Subscription;
use crate::store::{LanguagePreference, LanguageStore};
use std::cell::RefCell;

// Thread-local stack of provided stores; the innermost provider wins.
thread_local! {
    static PROVIDER_STACK: RefCell<Vec<LanguageStore>> = const { RefCell::new(Vec::new()) };
}

/// Run `f` with `store` visible to [`use_language`] and friends.
///
/// Providers nest: inside `f` a further call to `provide` shadows `store`
/// until it returns. The store is removed again even if `f` panics.
///
/// # Examples
///
/// ```
/// use langcell::context::{provide, use_language};
/// use langcell::storage::MemoryStorage;
/// use langcell::{Language, LanguageStore};
///
/// let store = LanguageStore::mount(MemoryStorage::new());
/// provide(&store, || {
///     let pref = use_language();
///     pref.set_lang.set(Language::En);
/// });
/// assert_eq!(store.lang(), Language::En);
///
/// // Outside a provider consumers see the default.
/// assert_eq!(use_language().lang, Language::Fr);
/// ```
pub fn provide<F, R>(store: &LanguageStore, f: F) -> R
where
    F: FnOnce() -> R,
{
    PROVIDER_STACK.with(|stack| {
        stack.borrow_mut().push(store.clone());
    });

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    PROVIDER_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });

    match result {
        Ok(r) => r,
        Err(e) => std::panic::resume_unwind(e),
    }
}

/// The innermost provided store, if any.
pub fn current_store() -> Option<LanguageStore> {
    PROVIDER_STACK.with(|stack| stack.borrow().last().cloned())
}

/// The current language and setter.
///
/// Without a provider this is `fr` with a no-op setter.
pub fn use_language() -> LanguagePreference {
    current_store()
        .map(|store| store.preference())
        .unwrap_or_default()
}

/// Shorthand for `use_language().lang`.
pub fn current_language() -> Language {
    current_store()
        .map(|store| store.lang())
        .unwrap_or_default()
}

/// Subscribe to the provided store. `None` outside a provider.
pub fn subscribe<F>(callback: F) -> Option<Subscription>
where
    F: Fn(Language) + Send + Sync + 'static,
{
    current_store().map(|store| store.subscribe(callback))
}

/// Number of nested providers on this thread.
pub fn depth() -> usize {
    PROVIDER_STACK.with(|stack| stack.borrow().len())
}
