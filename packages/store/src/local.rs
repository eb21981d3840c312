//! # Browser localStorage session backend
//!
//! [`LocalStorageBackend`] is the [`SessionBackend`] implementation used on the
//! **web platform**. It persists the session record into
//! `window.localStorage`, so the identity survives reloads and new tabs.
//!
//! All methods swallow storage errors (returning `None` for reads, doing
//! nothing for writes). A blocked or unavailable localStorage degrades to
//! "anonymous" rather than crashing the UI; the backend remains the authority
//! on whether a token is still valid.

use crate::session::SessionBackend;
use web_sys::Storage;

/// localStorage-backed SessionBackend for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
