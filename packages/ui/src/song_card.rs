use dioxus::prelude::*;
use store::Song;

/// Card showing one song's metadata; optional fields render only when set.
#[component]
pub fn SongCard(song: Song) -> Element {
    rsx! {
        div {
            class: "song-card",
            h3 { class: "song-card-title", "{song.song_name}" }
            div {
                class: "song-card-body",
                p { span { class: "song-field", "Movie:" } " {song.movie_name}" }
                p { span { class: "song-field", "Singer:" } " {song.singer_name}" }
                p { span { class: "song-field", "Music Director:" } " {song.music_director}" }
                p { span { class: "song-field", "Actual Pitch:" } " {song.actual_pitch}" }
                if let Some(ref practised) = song.practised_pitch {
                    p { span { class: "song-field", "Practised Pitch:" } " {practised}" }
                }
                if let Some(ref notes) = song.notes {
                    p { span { class: "song-field", "Notes:" } " {notes}" }
                }
            }
        }
    }
}
