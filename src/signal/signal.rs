use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Subscribers<T> {
    next_id: AtomicUsize,
    entries: RwLock<Vec<(usize, Subscriber<T>)>>,
}

impl<T> Subscribers<T> {
    fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(0),
            entries: RwLock::new(Vec::new()),
        }
    }

    fn insert(&self, subscriber: Subscriber<T>) -> usize {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, subscriber));
        id
    }

    fn remove(&self, id: usize) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(entry_id, _)| *entry_id != id);
    }

    fn snapshot(&self) -> Vec<Subscriber<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// A shared mutable cell that notifies subscribers when written.
///
/// Clones share the same value and subscriber list.
///
/// # Examples
///
/// ```
/// use langcell::signal::Signal;
///
/// let signal = Signal::new(1);
/// let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let _guard = signal.subscribe(move |v| sink.lock().unwrap().push(*v));
///
/// signal.set(2);
/// assert_eq!(signal.get(), 2);
/// assert_eq!(*seen.lock().unwrap(), vec![2]);
/// ```
pub struct Signal<T> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<Subscribers<T>>,
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Create a new signal with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(Subscribers::new()),
        }
    }

    /// Get the current value of the signal.
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Read the value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.value.read().unwrap_or_else(PoisonError::into_inner);
        f(&value)
    }

    /// Set a new value and notify every subscriber.
    pub fn set(&self, new_value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = new_value;
        self.notify();
    }

    /// Set a new value, notifying only when it differs from the current one.
    ///
    /// Returns whether the value changed.
    pub fn set_if_changed(&self, new_value: T) -> bool
    where
        T: PartialEq,
    {
        {
            let mut value = self.value.write().unwrap_or_else(PoisonError::into_inner);
            if *value == new_value {
                return false;
            }
            *value = new_value;
        }
        self.notify();
        true
    }

    /// Write a new value without notifying, returning the previous one.
    pub fn replace(&self, new_value: T) -> T {
        std::mem::replace(
            &mut *self.value.write().unwrap_or_else(PoisonError::into_inner),
            new_value,
        )
    }

    /// Update the value using a function.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut value = self.value.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut value);
        }
        self.notify();
    }

    /// Call `callback` with the new value after every write.
    ///
    /// The subscription lasts as long as the returned guard.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.subscribers.insert(Arc::new(callback));
        let weak: Weak<Subscribers<T>> = Arc::downgrade(&self.subscribers);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(subscribers) = weak.upgrade() {
                    subscribers.remove(id);
                }
            })),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Notify every subscriber of the current value.
    ///
    /// Pairs with [`replace`](Self::replace) when work must happen between the
    /// write and the notification.
    pub fn notify(&self) {
        let value = self.get();
        // Snapshot first so a subscriber may subscribe or drop a guard re-entrantly.
        for subscriber in self.subscribers.snapshot() {
            subscriber(&value);
        }
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

/// RAII guard for a signal subscription.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Keep the subscription alive for as long as the signal exists.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
