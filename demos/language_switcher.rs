//! A tiny "UI tree" that shares the language preference through context.
//!
//! Run twice to see the choice persist:
//!
//! ```text
//! cargo run --example language_switcher
//! ```

use langcell::storage::{FileStorage, MemoryStorage, Storage};
use langcell::{context, Language, LanguageStore};

fn greeting(lang: Language) -> &'static str {
    match lang {
        Language::Fr => "Bonjour",
        Language::En => "Hello",
    }
}

fn header() {
    let pref = context::use_language();
    println!("[header] {} ({})", greeting(pref.lang), pref.lang.native_name());
}

fn language_button() {
    let pref = context::use_language();
    let next = pref.lang.toggled();
    println!("[button] switching to {}", next.native_name());
    pref.set_lang.set(next);
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let storage: Box<dyn Storage> = match FileStorage::default_location() {
        Some(file) => {
            println!("Persisting to {}", file.path().display());
            Box::new(file)
        }
        None => Box::new(MemoryStorage::new()),
    };

    let store = LanguageStore::mount(storage);
    let _render = store.subscribe(|lang| println!("[root] re-render in {lang}"));

    context::provide(&store, || {
        header();
        language_button();
        header();
    });
}
