//! Platform glue shared by every view.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`],
//!   browser timers, `window.confirm`.
//! - **Native** (tests, tooling): one process-wide [`store::MemoryStore`],
//!   tokio timers, and a confirm that always declines.

use std::time::Duration;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create a handle to the platform's durable storage.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static SHARED: OnceLock<store::MemoryStore> = OnceLock::new();
        SHARED.get_or_init(store::MemoryStore::new).clone()
    }
}

/// Suspend the current task.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Ask the user a yes/no question with the browser's native dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("No dialog support, declining: {message}");
        false
    }
}
