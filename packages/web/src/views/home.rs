use dioxus::prelude::*;

use store::{Genre, GenreTransfer};
use ui::components::{use_toast, Spinner};
use ui::{use_session, CreateGenreDialog, GenreList};

use crate::Route;

/// `/` — landing hero for anonymous visitors, genre catalog once logged in.
#[component]
pub fn Home() -> Element {
    let session = use_session();

    if session().loading {
        return rsx! { Spinner {} };
    }

    if session().is_authenticated() {
        rsx! { Genres {} }
    } else {
        rsx! { Landing {} }
    }
}

#[component]
fn Landing() -> Element {
    rsx! {
        div {
            class: "landing",
            h1 { class: "landing-title", "SingersRepo" }
            p {
                class: "landing-tagline",
                "The one-stop repo for all your songs, easier management and access"
            }
            a { class: "btn btn-primary landing-cta", href: "/auth", "Get Started" }
        }
    }
}

#[component]
fn Genres() -> Element {
    let session = use_session();
    let toast_api = use_toast();
    let mut genres = use_signal(Vec::<Genre>::new);
    let mut loading = use_signal(|| true);
    let mut show_create = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);
    let nav = use_navigator();

    // Full refetch on mount and whenever `refresh` is bumped after a write.
    // On failure the previously loaded list stays visible.
    let _loader = use_resource(move || {
        let _tick = refresh();
        let state = session();
        async move {
            let config = api::ApiConfig::default();
            match api::list_genres(&config, state.session.as_ref()).await {
                Ok(list) => genres.set(list),
                Err(e) => {
                    tracing::error!("failed to load genres: {e}");
                    toast_api.error(e.to_string());
                }
            }
            loading.set(false);
        }
    });

    let on_select = move |genre: Genre| {
        let payload = GenreTransfer::new(genre.title.clone(), genre.songs.clone()).encode();
        nav.push(Route::GenreDetail {
            genre_id: genre.id.clone(),
            songs: payload,
        });
    };

    if loading() {
        return rsx! { Spinner {} };
    }

    rsx! {
        GenreList {
            genres: genres(),
            on_select: on_select,
            on_create: move |_| show_create.set(true),
        }

        if show_create() {
            CreateGenreDialog {
                on_success: move |_| {
                    show_create.set(false);
                    refresh += 1;
                },
                on_cancel: move |_| show_create.set(false),
            }
        }
    }
}
