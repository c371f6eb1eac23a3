//! # sessionStorage-backed store: browser-side persistence
//!
//! [`BrowserStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.sessionStorage` through `web-sys`, so values are
//! scoped to the browsing session of the current tab.
//!
//! The `Storage` handle is looked up on every call rather than cached: the
//! struct stays zero-sized and `Clone`, and there is nothing to invalidate
//! when the page changes origin policy.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::storage::{KeyValueStore, StorageError};

/// `window.sessionStorage` as a [`KeyValueStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .session_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("sessionStorage disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(format!("{value:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
