use dioxus::prelude::*;

use crate::i18n::{t, use_language, Lang};

const GATE_CSS: Asset = asset!("/assets/styling/gate.css");

/// Full-screen language picker. Renders `children` once a language is chosen.
#[component]
pub fn LanguageGate(children: Element) -> Element {
    let language = use_language();

    if language.is_selected() {
        return rsx! { {children} };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: GATE_CSS }

        div { class: "language_gate", role: "dialog", "aria-modal": "true",
            div { class: "gate_card",
                img { class: "gate_logo", src: "/images/logo.png", alt: {t(Lang::En, "common.logo_alt")} }
                h1 { class: "gate_brand", {t(Lang::En, "app.name")} }
                // Both prompts are shown since nothing has been chosen yet.
                p { class: "gate_prompt", {t(Lang::En, "gate.prompt")} }
                p { class: "gate_prompt secondary", {t(Lang::Es, "gate.prompt")} }
                div { class: "gate_choices",
                    for lang in Lang::ALL {
                        button {
                            key: "{lang.code()}",
                            r#type: "button",
                            class: "gate_choice",
                            lang: lang.code(),
                            "data-lang": lang.code(),
                            onclick: move |_| language.select(lang),
                            {lang.native_name()}
                        }
                    }
                }
            }
        }
    }
}
