use dioxus::prelude::*;

/// Centered loading spinner shown while a view resolves.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}
