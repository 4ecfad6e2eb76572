use dioxus::prelude::*;

use crate::i18n::t;

#[component]
pub fn NotFound() -> Element {
    let lang = crate::use_lang();
    rsx! {
        section { class: "not_found",
            h1 { {t(lang, "not_found.title")} }
            p { {t(lang, "not_found.body")} }
            Link { class: "btn primary", to: "/", {t(lang, "service_page.back")} }
        }
    }
}
