use dioxus::prelude::*;

use crate::i18n::t;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// Overlay dialog shared by the project and service galleries.
///
/// Closes on backdrop click, on the close button, and on Escape. Focus moves
/// into the dialog when it mounts so Escape works without a click first.
#[component]
pub fn Modal(label: String, on_close: EventHandler<()>, children: Element) -> Element {
    let lang = crate::use_lang();

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            evt.prevent_default();
            on_close.call(());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MODAL_CSS }

        div {
            class: "modal_backdrop",
            tabindex: "-1",
            onkeydown: on_keydown,
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "modal_panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{label}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "modal_close",
                    r#type: "button",
                    "aria-label": {t(lang, "common.close")},
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                {children}
            }
        }
    }
}
