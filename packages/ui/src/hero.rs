use dioxus::prelude::*;

use crate::i18n::t;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Full-viewport opener. Its rendered height drives the header transition.
#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            img {
                class: "hero_background",
                src: "/images/hero.jpg",
                alt: {t(lang, "hero.background_alt")},
            }
            div { class: "hero_overlay" }
            div { class: "hero_content",
                img { class: "hero_logo", src: "/images/logo.png", alt: {t(lang, "common.logo_alt")} }
                h1 { class: "hero_heading", {t(lang, "hero.main_heading")} }
                p { class: "hero_subheading", {t(lang, "hero.sub_heading")} }
            }
        }
    }
}

#[component]
pub fn Intro() -> Element {
    let lang = crate::use_lang();
    rsx! {
        section { id: "intro", class: "intro",
            div { class: "intro_text",
                h2 { class: "intro_title", {t(lang, "intro.title")} }
                p { class: "intro_subtitle", {t(lang, "intro.subtitle")} }
                p { class: "intro_description", {t(lang, "intro.description")} }
            }
            div { class: "intro_images",
                img { src: "/images/coffee.jpg", alt: {t(lang, "intro.coffee_alt")}, loading: "lazy" }
                img { src: "/images/banana.jpg", alt: {t(lang, "intro.banana_alt")}, loading: "lazy" }
            }
        }
    }
}

#[component]
pub fn Story() -> Element {
    let lang = crate::use_lang();
    rsx! {
        section { id: "story", class: "story",
            h2 { class: "section_title", {t(lang, "story.title")} }
            p { class: "story_company", {t(lang, "story.company")} }
            div { class: "story_bio",
                img {
                    class: "story_portrait",
                    src: "/images/gabriel.jpg",
                    alt: {t(lang, "story.portrait_alt")},
                    loading: "lazy",
                }
                div { class: "story_paragraphs",
                    p { {t(lang, "story.bio1")} }
                    p { {t(lang, "story.bio2")} }
                }
            }
        }
    }
}
