pub mod config;
pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ClientConfig, ConfigError};
pub use kv::KeyValueStore;
pub use session::{DARK_MODE_KEY, TOKEN_KEY};
