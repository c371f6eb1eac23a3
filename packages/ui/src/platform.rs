//! Platform glue: session storage, timers and the API root.
//!
//! - **Web** (WASM + `web` feature): `sessionStorage` via [`store::BrowserStore`],
//!   timers from `gloo-timers`, API root resolved against `window.location`.
//! - **Native** (tests, tooling): in-memory storage, tokio timers, API root
//!   from `FAMILY_TREE_API_URL` (a `.env` file is honoured).

use std::time::Duration;

use store::AppConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::BrowserStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Environment variable overriding the API root on native builds.
pub const API_URL_VAR: &str = "FAMILY_TREE_API_URL";

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ORIGIN: &str = "http://localhost:5000";

pub fn make_storage() -> PlatformStore {
    PlatformStore::new()
}

/// Absolute URL of the REST API.
pub fn api_root(config: &AppConfig) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        config.api.resolve(&origin)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => config.api.resolve(NATIVE_ORIGIN),
        }
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
