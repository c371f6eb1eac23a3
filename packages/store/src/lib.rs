pub mod config;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use config::AppConfig;
pub use storage::{KeyValueStore, SessionStore, StorageError, AUTH_TOKEN_KEY};
