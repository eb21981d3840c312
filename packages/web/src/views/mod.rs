//! Page views for the web application.
//!
//! - [`Home`] — landing hero for anonymous visitors, genre catalog once
//!   authenticated.
//! - [`Auth`] — combined login / sign-up form.
//! - [`GenreDetail`] — songs of one genre, decoded from the URL-embedded
//!   transfer payload, with client-side filtering.

mod home;
pub use home::Home;

mod auth;
pub use auth::Auth;

mod genre_detail;
pub use genre_detail::GenreDetail;
