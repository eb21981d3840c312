use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{Navbar, SessionProvider};
use views::{Auth, GenreDetail, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/auth")]
    Auth {},
    #[route("/genre/:genre_id?:songs")]
    GenreDetail { genre_id: String, songs: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Shared chrome: navbar above every routed view.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}
