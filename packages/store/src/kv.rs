//! # Key/value storage seam
//!
//! The browser keeps two durable values for the app (the session token and
//! the dark-mode flag). [`KeyValueStore`] is the narrow interface every
//! backend implements so the session and theme code never touches
//! `localStorage` directly:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests and native builds |
//! | `LocalStore` | WASM with the `web` feature, backed by `window.localStorage` |
//!
//! Calls are synchronous. `localStorage` is synchronous in the browser, and
//! logout relies on the token being gone before the next request is built.

/// Durable string storage keyed by name.
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent or the backend is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str);

    /// Remove a value. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
