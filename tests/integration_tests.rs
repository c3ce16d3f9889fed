//! Integration tests for Langcell

use langcell::storage::{FileStorage, MemoryStorage, Storage, UnavailableStorage};
use langcell::{context, Language, LanguageStore, StorageError, STORAGE_KEY};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tempfile::tempdir;

fn stored(storage: &impl Storage) -> Option<String> {
    storage.get_item(STORAGE_KEY).unwrap()
}

#[test]
fn stored_english_is_restored() {
    let storage = Arc::new(MemoryStorage::with_entries([(STORAGE_KEY, "en")]));
    let store = LanguageStore::mount(storage.clone());
    assert_eq!(store.lang(), Language::En);
}

#[test]
fn unknown_stored_value_falls_back_to_french() {
    let storage = Arc::new(MemoryStorage::with_entries([(STORAGE_KEY, "xx")]));
    let store = LanguageStore::mount(storage.clone());
    assert_eq!(store.lang(), Language::Fr);
}

#[test]
fn first_load_populates_storage() {
    let storage = Arc::new(MemoryStorage::new());
    assert_eq!(stored(&storage), None);

    let store = LanguageStore::mount(storage.clone());
    assert_eq!(store.lang(), Language::Fr);
    assert_eq!(stored(&storage).as_deref(), Some("fr"));
}

#[test]
fn setter_updates_memory_and_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let store = LanguageStore::mount(storage.clone());

    store.set_lang(Language::En);
    assert_eq!(store.lang(), Language::En);
    assert_eq!(stored(&storage).as_deref(), Some("en"));
}

#[test]
fn unavailable_storage_never_surfaces_errors() {
    let store = LanguageStore::mount(UnavailableStorage::with_reason("no window"));
    assert_eq!(store.lang(), Language::Fr);

    store.set_lang(Language::En);
    assert_eq!(store.lang(), Language::En);
}

#[test]
fn preference_survives_remount_through_file() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("preferences.toml");

    {
        let store = LanguageStore::mount(FileStorage::new(&path));
        assert_eq!(store.lang(), Language::Fr);
        store.set_lang(Language::En);
    }

    let store = LanguageStore::mount(FileStorage::new(&path));
    assert_eq!(store.lang(), Language::En);
    assert_eq!(stored(&FileStorage::new(&path)).as_deref(), Some("en"));
}

#[test]
fn corrupt_file_defaults_and_is_repaired_on_mount() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("preferences.toml");
    std::fs::write(&path, "bl-lang = [").unwrap();

    let file = FileStorage::new(&path);
    assert!(matches!(file.get_item(STORAGE_KEY), Err(StorageError::Decode(_))));

    let store = LanguageStore::mount(file.clone());
    assert_eq!(store.lang(), Language::Fr);
    assert_eq!(stored(&file).as_deref(), Some("fr"));
}

#[test]
fn shared_settings_file_is_read_and_preserved() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("preferences.toml");
    std::fs::write(&path, "bl-lang = \"en\"\nvolume = 3\n").unwrap();

    let store = LanguageStore::mount(FileStorage::new(&path));
    assert_eq!(store.lang(), Language::En);

    store.set_lang(Language::Fr);
    let content = std::fs::read_to_string(&path).unwrap();
    let table: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(table["bl-lang"].as_str(), Some("fr"));
    assert_eq!(table["volume"].as_integer(), Some(3));
}

#[test]
fn consumers_share_one_store_through_context() {
    let storage = Arc::new(MemoryStorage::new());
    let store = LanguageStore::mount(storage.clone());
    let renders = Arc::new(Mutex::new(Vec::new()));

    let header = {
        let renders = renders.clone();
        context::provide(&store, move || {
            context::subscribe(move |lang| renders.lock().unwrap().push(lang))
        })
    };
    assert!(header.is_some());

    // A second consumer changes the language from a button handler.
    context::provide(&store, || {
        let pref = context::use_language();
        assert_eq!(pref.lang, Language::Fr);
        pref.set_lang.set(pref.lang.toggled());
    });

    assert_eq!(store.lang(), Language::En);
    assert_eq!(stored(&storage).as_deref(), Some("en"));
    assert_eq!(*renders.lock().unwrap(), vec![Language::En]);
}

#[test]
fn setter_outside_provider_is_a_noop() {
    let storage = Arc::new(MemoryStorage::new());
    let store = LanguageStore::mount(storage.clone());

    context::use_language().set_lang.set(Language::En);

    assert_eq!(store.lang(), Language::Fr);
    assert_eq!(stored(&storage).as_deref(), Some("fr"));
}

#[test]
fn unmounting_keeps_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let setter = {
        let store = LanguageStore::mount(storage.clone());
        store.set_lang(Language::En);
        store.setter()
    };

    setter.set(Language::Fr);
    assert!(!setter.is_bound());
    assert_eq!(stored(&storage).as_deref(), Some("en"));
}

#[test]
fn subscription_count_tracks_guards() {
    let store = LanguageStore::mount(MemoryStorage::new());
    let counter = Arc::new(AtomicUsize::new(0));

    let guards: Vec<_> = (0..3)
        .map(|_| {
            let counter = counter.clone();
            store.subscribe(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    store.toggle();
    assert_eq!(counter.load(Ordering::SeqCst), 3);

    drop(guards);
    store.toggle();
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}
