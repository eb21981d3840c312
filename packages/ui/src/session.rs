//! Session context and hooks for the UI.
//!
//! `store::SessionStore` is the persistent source of truth; the
//! [`Signal<SessionState>`] provided here is the broadcast channel that lets
//! any mounted view react to login/logout without a full page reload.

use dioxus::prelude::*;
use store::{Session, SessionStore};

/// Auth state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The stored user id, when authenticated.
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Create a platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): browser localStorage
/// - **Elsewhere** (native builds, tests): process-wide in-memory store
pub fn make_store() -> SessionStore<impl store::SessionBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageBackend::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static FALLBACK: OnceLock<store::MemoryBackend> = OnceLock::new();
        SessionStore::new(FALLBACK.get_or_init(store::MemoryBackend::new).clone())
    }
}

/// Provider component that hydrates the persisted session and broadcasts
/// auth-state changes. Wrap your app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    // Hydrate from persistent storage on mount
    let _ = use_resource(move || async move {
        let session = make_store().get();
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a freshly issued session and broadcast the change.
pub fn store_session(mut state: Signal<SessionState>, token: &str, user_id: &str) {
    make_store().set(token, user_id);
    state.set(SessionState {
        session: Some(Session {
            token: token.to_string(),
            user_id: user_id.to_string(),
        }),
        loading: false,
    });
}

/// Clear the stored session, broadcast, and return to the auth entry point.
pub fn clear_session(mut state: Signal<SessionState>) {
    make_store().clear();
    state.set(SessionState {
        session: None,
        loading: false,
    });
    redirect("/auth");
}

/// Hard-navigate to a path (no-op outside the browser).
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_store_round_trip() {
        let store = make_store();
        store.set("t1", "u1");

        // A fresh handle sees the same process-wide state
        let again = make_store();
        assert_eq!(again.get().unwrap().token, "t1");

        again.clear();
        assert!(make_store().get().is_none());
    }
}
