//! Persisted state cell
//!
//! A `PersistedCell` makes one value behave like ordinary program state
//! while durably mirroring it to a storage slot. The composition root
//! owns the cell and passes it to presentation and repository logic;
//! there are no ambient singletons. Observers register explicitly and
//! are notified synchronously after each committed mutation.
//!
//! Failure semantics: a missing slot yields the fallback silently, an
//! unparseable slot yields the fallback with a warning, and write
//! failures are logged only so the session continues in memory.

use serde::{de::DeserializeOwned, Serialize};

use crate::storage::Storage;

type Listener<T> = Box<dyn FnMut(&T)>;

/// One value mirrored to one storage key
pub struct PersistedCell<T> {
    storage: Storage,
    key: String,
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T: Serialize + DeserializeOwned> PersistedCell<T> {
    /// Load the cell from storage, substituting `fallback` when the slot
    /// is absent or unreadable.
    pub fn load(storage: Storage, key: impl Into<String>, fallback: T) -> Self {
        let key = key.into();
        let path = storage.slot_file(&key);
        let value = if path.exists() {
            match storage.read_json(&path) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "stored value unreadable; using fallback");
                    fallback
                }
            }
        } else {
            fallback
        };

        Self {
            storage,
            key,
            value,
            listeners: Vec::new(),
        }
    }

    /// Borrow the current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value, persist it, and notify observers
    pub fn set(&mut self, value: T) {
        self.commit(value);
    }

    /// Replace the value via a pure transform of the previous value.
    ///
    /// The transform form keeps queued mutations from clobbering each
    /// other: every caller sees the latest committed value.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.commit(next);
    }

    /// Register an observer, invoked synchronously after every commit
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&mut self, value: T) {
        self.value = value;
        let path = self.storage.slot_file(&self.key);
        if let Err(err) = self
            .storage
            .init()
            .and_then(|_| self.storage.write_json(&path, &self.value))
        {
            tracing::warn!(key = %self.key, error = %err, "state write failed; continuing in memory");
        }
        for listener in &mut self.listeners {
            listener(&self.value);
        }
    }
}
