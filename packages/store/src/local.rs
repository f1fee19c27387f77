//! # `localStorage` backend: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! goes through `gloo-storage`'s raw `localStorage` handle so values stay
//! plain strings: the token is stored as typed and the dark-mode flag is
//! already JSON-encoded by [`crate::session`].
//!
//! ## Error handling
//!
//! Reads that fail degrade to `None`. Rejected writes and removals are
//! logged and dropped, so the app behaves as if nothing was persisted.

use gloo_storage::{LocalStorage, Storage};

use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!("localStorage rejected write to {key}: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            tracing::warn!("localStorage rejected removal of {key}: {e:?}");
        }
    }
}
