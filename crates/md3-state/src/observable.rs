//! # Observable
//!
//! A replay-last value holder: new subscribers receive the current value
//! immediately, then every value published after it.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Observable<T> Internals                              │
//! │                                                                         │
//! │   writer: Mutex<()>          held for read ─► compute ─► publish ─►    │
//! │                              deliver, so concurrent updates never       │
//! │                              interleave and observers see values        │
//! │                              in the order they were produced            │
//! │                                                                         │
//! │   state:  Mutex<State<T>>    value + observer list, held only for       │
//! │                              short reads and writes, never while a      │
//! │                              callback runs                              │
//! │                                                                         │
//! │   Callbacks may call get(), or drop a Subscription.                    │
//! │   Callbacks must NOT call set/update/subscribe on the same             │
//! │   observable (the writer lock is held while they run).                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use md3_state::Observable;
//! use std::sync::{Arc, Mutex};
//!
//! let counter = Observable::new(0);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let subscription = counter.subscribe(move |value| sink.lock().unwrap().push(*value));
//! counter.update(|n| n + 1);
//! drop(subscription);
//! counter.set(10);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct State<T> {
    value: T,
    next_id: u64,
    observers: Vec<(u64, Callback<T>)>,
}

struct Shared<T> {
    writer: Mutex<()>,
    state: Mutex<State<T>>,
}

impl<T> Shared<T> {
    // A panicking observer must not wedge every later mutation.
    fn state(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remove(&self, id: u64) {
        self.state().observers.retain(|(observer_id, _)| *observer_id != id);
    }
}

/// Shared, observable value.
///
/// Cloning an `Observable` yields another handle to the same value.
pub struct Observable<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Observable {
            shared: Arc::new(Shared {
                writer: Mutex::new(()),
                state: Mutex::new(State {
                    value: initial,
                    next_id: 0,
                    observers: Vec::new(),
                }),
            }),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.shared.state().value.clone()
    }

    /// Replaces the value and notifies every subscriber.
    pub fn set(&self, value: T) {
        self.update(move |_| value);
    }

    /// Computes the next value from the current one and publishes it.
    ///
    /// The read, the computation and the publish happen under the writer
    /// lock; two concurrent `update` calls can never both start from the
    /// same value. Returns the published value.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let _writer = self.shared.writer();

        let (next, observers) = {
            let mut state = self.shared.state();
            let next = f(&state.value);
            state.value = next.clone();
            (next, snapshot_observers(&state))
        };

        for callback in &observers {
            callback(&next);
        }
        next
    }

    /// Registers `callback`, delivers the current value to it, and keeps
    /// delivering every later value until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let _writer = self.shared.writer();

        let (id, current) = {
            let mut state = self.shared.state();
            let id = state.next_id;
            state.next_id += 1;
            state.observers.push((id, callback.clone()));
            (id, state.value.clone())
        };

        callback(&current);

        let shared: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.remove(id);
                }
            })),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.shared.state().observers.len()
    }
}

fn snapshot_observers<T>(state: &State<T>) -> Vec<Callback<T>> {
    state
        .observers
        .iter()
        .map(|(_, callback)| callback.clone())
        .collect()
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Observable {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Default + Clone + Send + Sync + 'static> Default for Observable<T> {
    fn default() -> Self {
        Observable::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state();
        f.debug_struct("Observable")
            .field("value", &state.value)
            .field("subscribers", &state.observers.len())
            .finish()
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Handle to a registered observer. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Detaches the observer now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
