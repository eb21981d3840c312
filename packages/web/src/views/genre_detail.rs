use dioxus::prelude::*;

use store::filter::{self, ALL};
use store::{GenreTransfer, Song};
use ui::components::{use_toast, Spinner};
use ui::{use_session, AddSongDialog, SongCard, SongFilters};

/// Songs of one genre, decoded from the URL-embedded transfer payload.
///
/// A malformed or missing payload degrades to an empty song list and title;
/// the page still loads. After a song is added, the owning genre is refetched
/// and the list replaced wholesale.
#[component]
pub fn GenreDetail(genre_id: String, songs: String) -> Element {
    // Track the raw payload in a signal so the loader re-runs on route change
    let mut songs_param = use_signal(|| songs.clone());
    if *songs_param.peek() != songs {
        songs_param.set(songs.clone());
    }

    let session = use_session();
    let toast_api = use_toast();
    let mut song_list = use_signal(Vec::<Song>::new);
    let mut title = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut director = use_signal(|| ALL.to_string());
    let mut singer = use_signal(|| ALL.to_string());
    let mut show_add = use_signal(|| false);

    let _loader = use_resource(move || {
        let raw = songs_param();
        async move {
            let transfer = GenreTransfer::decode(&raw);
            song_list.set(transfer.songs);
            title.set(transfer.title);
            loading.set(false);
        }
    });

    // Refetch the owning genre after a successful song create; on failure
    // the currently displayed list stays.
    let genre_id_for_refetch = genre_id.clone();
    let refetch = move || {
        let genre_id = genre_id_for_refetch.clone();
        async move {
            let config = api::ApiConfig::default();
            let state = session();
            let user_id = state.user_id().unwrap_or("").to_string();
            match api::list_genres_for_user(&config, state.session.as_ref(), &user_id).await {
                Ok(list) => {
                    if let Some(genre) = list.into_iter().find(|g| g.id == genre_id) {
                        song_list.set(genre.songs);
                        title.set(genre.title);
                    }
                }
                Err(e) => {
                    tracing::error!("failed to refresh genre: {e}");
                    toast_api.error(e.to_string());
                }
            }
        }
    };

    let handle_added = move |_| {
        show_add.set(false);
        spawn(refetch());
    };

    if loading() {
        return rsx! { Spinner {} };
    }

    let all_songs = song_list();
    let filtered = filter::filter_songs(&all_songs, &director(), &singer());

    rsx! {
        div {
            class: "genre-detail",
            div {
                class: "genre-detail-header",
                h1 { class: "genre-detail-title", "{title()} Songs" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_add.set(true),
                    "Add Song"
                }
            }

            SongFilters {
                songs: all_songs.clone(),
                director: director(),
                singer: singer(),
                on_director_change: move |value| director.set(value),
                on_singer_change: move |value| singer.set(value),
            }

            if filtered.is_empty() {
                p { class: "genre-detail-empty", "No songs to show." }
            } else {
                div {
                    class: "song-grid",
                    for song in filtered {
                        SongCard { key: "{song.id}", song: song.clone() }
                    }
                }
            }

            if show_add() {
                AddSongDialog {
                    genre_id: genre_id.clone(),
                    on_success: handle_added,
                    on_cancel: move |_| show_add.set(false),
                }
            }
        }
    }
}
