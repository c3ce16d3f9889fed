//! Consumption boundary: hand the store to a UI tree without threading it
//! through every call.
//!
//! A root calls [`provide`] around rendering; anything rendered inside reads
//! the preference with [`use_language`].

mod stack;

pub use stack::{current_language, current_store, depth, provide, subscribe, use_language};
