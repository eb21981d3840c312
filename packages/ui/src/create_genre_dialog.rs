use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::modal_overlay::ModalOverlay;
use crate::session::use_session;

/// Modal form for creating a new genre.
///
/// Owns its request; errors render inline in the card and the entered title
/// is kept. The parent re-lists genres on success instead of appending.
#[component]
pub fn CreateGenreDialog(on_success: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let session = use_session();
    let mut title = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let entered = title().trim().to_string();
            if entered.is_empty() {
                return;
            }

            loading.set(true);
            let config = api::ApiConfig::default();
            let state = session();
            match api::create_genre(&config, state.session.as_ref(), &entered).await {
                Ok(()) => {
                    loading.set(false);
                    title.set(String::new());
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("create genre failed: {e}");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),

            div {
                class: "dialog",
                h2 { class: "dialog-title", "Create New Genre" }

                if let Some(err) = error() {
                    div { class: "dialog-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        Label { html_for: "genre-title", "Genre Title" }
                        Input {
                            id: "genre-title",
                            placeholder: "Enter genre title",
                            value: title(),
                            required: true,
                            disabled: loading(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "dialog-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating..." } else { "Create Genre" }
                    }
                }
            }
        }
    }
}
