//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    clear_session, make_store, redirect, store_session, use_session, SessionProvider, SessionState,
};

mod navbar;
pub use navbar::Navbar;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod genre_list;
pub use genre_list::GenreList;

mod song_card;
pub use song_card::SongCard;

mod filters;
pub use filters::SongFilters;

mod create_genre_dialog;
pub use create_genre_dialog::CreateGenreDialog;

mod add_song_dialog;
pub use add_song_dialog::AddSongDialog;

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");
