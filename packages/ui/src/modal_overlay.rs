use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

const DIALOGS_CSS: Asset = asset!("/assets/styling/dialogs.css");

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card, or the corner close button, triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: DIALOGS_CSS }

        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 20, height: 20 }
                }
                {children}
            }
        }
    }
}
