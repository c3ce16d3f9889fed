//! Reactive cell with subscriber notification.
//!
//! A [`Signal`] holds a value; writes notify every live [`Subscription`].

mod signal;

pub use signal::{Signal, Subscription};
