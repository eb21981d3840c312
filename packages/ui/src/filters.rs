//! Filter bar for the genre detail view.
//!
//! Option sets derive from the displayed song list (first-occurrence order)
//! and recompute whenever the list changes. The filtering itself is the pure
//! `store::filter` logic; this component only renders the two selects.

use dioxus::prelude::*;
use store::filter::{distinct_directors, distinct_singers, ALL};
use store::Song;

#[component]
pub fn SongFilters(
    songs: Vec<Song>,
    director: String,
    singer: String,
    on_director_change: EventHandler<String>,
    on_singer_change: EventHandler<String>,
) -> Element {
    let directors = distinct_directors(&songs);
    let singers = distinct_singers(&songs);

    rsx! {
        div {
            class: "song-filters",
            div {
                class: "song-filter",
                label { r#for: "filter-director", "Music Director" }
                select {
                    id: "filter-director",
                    value: "{director}",
                    onchange: move |evt| on_director_change.call(evt.value()),
                    option { value: ALL, "All" }
                    for name in directors {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }
            div {
                class: "song-filter",
                label { r#for: "filter-singer", "Singer" }
                select {
                    id: "filter-singer",
                    value: "{singer}",
                    onchange: move |evt| on_singer_change.call(evt.value()),
                    option { value: ALL, "All" }
                    for name in singers {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }
        }
    }
}
