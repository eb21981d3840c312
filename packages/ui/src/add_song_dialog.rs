use dioxus::prelude::*;
use store::SongDraft;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label};
use crate::modal_overlay::ModalOverlay;
use crate::session::use_session;

/// Modal form for adding a song to a genre.
///
/// Five required fields, two optional. On success the form resets and the
/// parent refetches the owning genre; on failure the entered values stay.
#[component]
pub fn AddSongDialog(
    genre_id: String,
    on_success: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let session = use_session();
    let toast_api = use_toast();
    let mut song_name = use_signal(String::new);
    let mut movie_name = use_signal(String::new);
    let mut singer_name = use_signal(String::new);
    let mut music_director = use_signal(String::new);
    let mut actual_pitch = use_signal(String::new);
    let mut practised_pitch = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let genre_id = genre_id.clone();
        spawn(async move {
            let draft = SongDraft::from_form(
                &song_name(),
                &movie_name(),
                &singer_name(),
                &music_director(),
                &actual_pitch(),
                &practised_pitch(),
                &notes(),
            );
            if !draft.is_complete() {
                return;
            }

            loading.set(true);
            let config = api::ApiConfig::default();
            let state = session();
            match api::add_song(&config, state.session.as_ref(), &genre_id, &draft).await {
                Ok(()) => {
                    toast_api.success("Song added successfully");
                    song_name.set(String::new());
                    movie_name.set(String::new());
                    singer_name.set(String::new());
                    music_director.set(String::new());
                    actual_pitch.set(String::new());
                    practised_pitch.set(String::new());
                    notes.set(String::new());
                    loading.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("add song failed: {e}");
                    toast_api.error(e.to_string());
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),

            div {
                class: "dialog",
                h2 { class: "dialog-title", "Add New Song" }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        Label { html_for: "song-name", "Song Name" }
                        Input {
                            id: "song-name",
                            placeholder: "Enter song name",
                            value: song_name(),
                            required: true,
                            disabled: loading(),
                            oninput: move |evt: FormEvent| song_name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "movie-name", "Movie Name" }
                        Input {
                            id: "movie-name",
                            placeholder: "Enter movie name",
                            value: movie_name(),
                            required: true,
                            disabled: loading(),
                            oninput: move |evt: FormEvent| movie_name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "singer-name", "Singer Name" }
                        Input {
                            id: "singer-name",
                            placeholder: "Enter singer name",
                            value: singer_name(),
                            required: true,
                            disabled: loading(),
                            oninput: move |evt: FormEvent| singer_name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "music-director", "Music Director" }
                        Input {
                            id: "music-director",
                            placeholder: "Enter music director name",
                            value: music_director(),
                            required: true,
                            disabled: loading(),
                            oninput: move |evt: FormEvent| music_director.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "actual-pitch", "Actual Pitch" }
                        Input {
                            id: "actual-pitch",
                            placeholder: "Enter actual pitch",
                            value: actual_pitch(),
                            required: true,
                            disabled: loading(),
                            oninput: move |evt: FormEvent| actual_pitch.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "practised-pitch", "Practised Pitch (Optional)" }
                        Input {
                            id: "practised-pitch",
                            placeholder: "Enter practised pitch",
                            value: practised_pitch(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| practised_pitch.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "song-notes", "Notes (Optional)" }
                        Input {
                            id: "song-notes",
                            placeholder: "Enter any notes",
                            value: notes(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| notes.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "dialog-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Adding Song..." } else { "Add Song" }
                    }
                }
            }
        }
    }
}
