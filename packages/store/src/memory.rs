use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionBackend;

/// In-memory SessionBackend for testing and the non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStore, LEGACY_TOKEN_KEY, LEGACY_USER_ID_KEY, SESSION_KEY};

    #[test]
    fn test_set_and_get() {
        let store = SessionStore::new(MemoryBackend::new());

        // Initially anonymous
        assert!(store.get().is_none());

        store.set("t1", "u1");

        let session = store.get().unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user_id, "u1");
    }

    #[test]
    fn test_clear() {
        let store = SessionStore::new(MemoryBackend::new());

        store.set("t1", "u1");
        assert!(store.get().is_some());

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let store = SessionStore::new(MemoryBackend::new());

        store.set("t1", "u1");
        store.set("t2", "u2");

        let session = store.get().unwrap();
        assert_eq!(session.token, "t2");
        assert_eq!(session.user_id, "u2");
    }

    #[test]
    fn test_malformed_record_reads_as_anonymous() {
        let backend = MemoryBackend::new();
        backend.write(SESSION_KEY, "not json");

        let store = SessionStore::new(backend);
        assert!(store.get().is_none());
    }

    #[test]
    fn test_legacy_keys_migrate_into_record() {
        let backend = MemoryBackend::new();
        backend.write(LEGACY_TOKEN_KEY, "t1");
        backend.write(LEGACY_USER_ID_KEY, "u1");

        let store = SessionStore::new(backend.clone());
        let session = store.get().unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user_id, "u1");

        // Loose keys are gone, the record remains
        assert!(backend.read(LEGACY_TOKEN_KEY).is_none());
        assert!(backend.read(LEGACY_USER_ID_KEY).is_none());
        assert!(backend.read(SESSION_KEY).is_some());
        assert!(store.get().is_some());
    }

    #[test]
    fn test_legacy_token_without_user_id_is_anonymous() {
        let backend = MemoryBackend::new();
        backend.write(LEGACY_TOKEN_KEY, "t1");

        let store = SessionStore::new(backend);
        assert!(store.get().is_none());
    }
}
