//! # Session persistence — the single source of truth for auth identity
//!
//! The session is one atomic record ([`Session`]) rather than two independent
//! keys, so a token can never be stored without its paired user id. Reads and
//! writes go through [`SessionStore`], which is generic over a raw key-value
//! [`SessionBackend`]:
//!
//! - [`crate::MemoryBackend`] — tests and the non-browser fallback
//! - `LocalStorageBackend` (wasm + `web` feature) — browser localStorage
//!
//! Earlier builds stored the pair under two loose keys (`token` / `userId`);
//! [`SessionStore::get`] coalesces that layout into the record once, then the
//! loose keys are removed.

use serde::{Deserialize, Serialize};

/// The authenticated identity held by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

/// Storage key for the session record.
pub const SESSION_KEY: &str = "singersrepo_session";

/// Legacy keys from builds that persisted the pair as two separate values.
pub const LEGACY_TOKEN_KEY: &str = "token";
pub const LEGACY_USER_ID_KEY: &str = "userId";

/// Raw key-value persistence underneath the session store.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Session accessor over a pluggable backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist both values as one record.
    pub fn set(&self, token: &str, user_id: &str) {
        let session = Session {
            token: token.to_string(),
            user_id: user_id.to_string(),
        };
        if let Ok(json) = serde_json::to_string(&session) {
            self.backend.write(SESSION_KEY, &json);
        }
    }

    /// The stored session, or `None` when anonymous.
    ///
    /// A malformed record reads as anonymous. When only the legacy two-key
    /// layout is present, both keys must exist for a session to be formed;
    /// the pair is then migrated into the record.
    pub fn get(&self) -> Option<Session> {
        if let Some(json) = self.backend.read(SESSION_KEY) {
            return serde_json::from_str(&json).ok();
        }

        let token = self.backend.read(LEGACY_TOKEN_KEY)?;
        let user_id = self.backend.read(LEGACY_USER_ID_KEY)?;
        let session = Session { token, user_id };
        if let Ok(json) = serde_json::to_string(&session) {
            self.backend.write(SESSION_KEY, &json);
        }
        self.backend.remove(LEGACY_TOKEN_KEY);
        self.backend.remove(LEGACY_USER_ID_KEY);
        Some(session)
    }

    /// Remove the record (and any legacy keys) — logout.
    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
        self.backend.remove(LEGACY_TOKEN_KEY);
        self.backend.remove(LEGACY_USER_ID_KEY);
    }
}
