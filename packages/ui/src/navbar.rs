//! Top navigation bar with session-aware links.

use dioxus::prelude::*;

use crate::icons::{FaBars, FaXmark};
use crate::session::{clear_session, use_session};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Current location path, used for active-link highlighting.
fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                a { class: "navbar-brand", href: "/", "SingersRepo" }

                div {
                    class: "navbar-links",
                    NavLinks {}
                }

                button {
                    class: "navbar-menu-toggle",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 24, height: 24 }
                    } else {
                        Icon { icon: FaBars, width: 24, height: 24 }
                    }
                }
            }

            if menu_open() {
                div {
                    class: "navbar-mobile",
                    NavLinks {}
                }
            }
        }
    }
}

#[component]
fn NavLinks() -> Element {
    let session = use_session();
    let path = current_path();

    let home_class = if path == "/" {
        "navbar-link active"
    } else {
        "navbar-link"
    };
    let auth_class = if path == "/auth" {
        "navbar-link active"
    } else {
        "navbar-link"
    };

    rsx! {
        a { class: home_class, href: "/", "Home" }
        if session().is_authenticated() {
            // Logout clears the store, broadcasts, and redirects to /auth
            button {
                class: "navbar-link",
                onclick: move |_| clear_session(session),
                "Logout"
            }
        } else {
            a { class: auth_class, href: "/auth", "Login" }
        }
        a { class: "navbar-link", href: "#", "About" }
    }
}
