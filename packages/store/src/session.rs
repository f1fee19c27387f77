//! # Persisted client values
//!
//! The two values that survive a reload:
//!
//! | Key | Encoding | Meaning |
//! |-----|----------|---------|
//! | [`TOKEN_KEY`] (`"token"`) | raw string | bearer token of the current session |
//! | [`DARK_MODE_KEY`] (`"darkMode"`) | JSON boolean | dark theme enabled |
//!
//! The HTTP client calls [`load_token`] right before building each request,
//! so clearing the token here is enough for a logout to apply everywhere.

use crate::kv::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Read the persisted bearer token. Empty strings count as absent.
pub fn load_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn save_token(store: &impl KeyValueStore, token: &str) {
    store.set(TOKEN_KEY, token);
}

pub fn clear_token(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
}

/// Read the dark-mode flag. Defaults to dark when unset or unparsable.
pub fn load_dark_mode(store: &impl KeyValueStore) -> bool {
    store
        .get(DARK_MODE_KEY)
        .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
        .unwrap_or(true)
}

pub fn save_dark_mode(store: &impl KeyValueStore, dark: bool) {
    match serde_json::to_string(&dark) {
        Ok(raw) => store.set(DARK_MODE_KEY, &raw),
        Err(e) => tracing::warn!("Failed to encode dark mode flag: {e}"),
    }
}
