//! Transient top-center notifications.
//!
//! Success and error variants, auto-dismissed after ~3 seconds in the
//! browser; clicking a toast dismisses it immediately.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for pushing notifications from anywhere under the provider.
#[derive(Clone, Copy)]
pub struct ToastApi {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastApi {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;
        let id = next_id() + 1;
        next_id.set(id);
        toasts.write().push(Toast { id, kind, message });

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
            toasts.write().retain(|t| t.id != id);
        });
    }

    fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

/// Get the toast handle.
pub fn use_toast() -> ToastApi {
    use_context::<ToastApi>()
}

/// Provider component that renders the notification area.
/// Wrap your app with this component to enable [`use_toast`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    let toast_api = use_context_provider(|| ToastApi { toasts, next_id });

    rsx! {
        {children}

        div {
            class: "toaster",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: if toast.kind == ToastKind::Success {
                        "toast toast-success"
                    } else {
                        "toast toast-error"
                    },
                    onclick: move |_| toast_api.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
