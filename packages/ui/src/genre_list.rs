//! Genre grid with empty state. Fetching lives in the owning view; this
//! component only renders and reports clicks.

use dioxus::prelude::*;
use store::Genre;

use crate::icons::FaPlus;
use crate::Icon;

const GENRES_CSS: Asset = asset!("/assets/styling/genres.css");

#[component]
pub fn GenreList(
    genres: Vec<Genre>,
    on_select: EventHandler<Genre>,
    on_create: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: GENRES_CSS }

        div {
            class: "genre-page",
            div {
                class: "genre-header",
                h1 { class: "genre-heading", "Your Music Genres" }
                if !genres.is_empty() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_create.call(()),
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Create Genre"
                    }
                }
            }

            if genres.is_empty() {
                div {
                    class: "genre-empty",
                    p {
                        "You haven't created any genres yet. Start organizing your music by creating your first genre!"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_create.call(()),
                        Icon { icon: FaPlus, width: 18, height: 18 }
                        "Create Genre"
                    }
                }
            } else {
                div {
                    class: "genre-grid",
                    for genre in genres {
                        GenreCard {
                            key: "{genre.id}",
                            genre: genre.clone(),
                            on_select: on_select,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GenreCard(genre: Genre, on_select: EventHandler<Genre>) -> Element {
    // Date part of the ISO timestamp is enough for the card
    let created = genre
        .created_at
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string();
    let count = genre.songs.len();

    rsx! {
        div {
            class: "genre-card",
            onclick: {
                let genre = genre.clone();
                move |_| on_select.call(genre.clone())
            },
            h3 { class: "genre-card-title", "{genre.title}" }
            p {
                class: "genre-card-count",
                if count == 1 { "1 song" } else { "{count} songs" }
            }
            div {
                class: "genre-card-footer",
                span { "Created {created}" }
                span { class: "genre-card-view", "View Details →" }
            }
        }
    }
}
