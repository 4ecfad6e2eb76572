use dioxus::prelude::*;

use crate::carousel::{use_carousel, CarouselView};
use crate::catalog::{Project, PROJECTS};
use crate::i18n::t;
use crate::modal::Modal;

const PROJECTS_CSS: Asset = asset!("/assets/styling/projects.css");

#[component]
pub fn Projects() -> Element {
    let lang = crate::use_lang();
    let mut selected = use_signal(|| None::<Project>);

    rsx! {
        document::Link { rel: "stylesheet", href: PROJECTS_CSS }

        section { id: "projects", class: "projects",
            h2 { class: "section_title", {t(lang, "projects.title")} }
            p { class: "section_subtitle", {t(lang, "projects.subtitle")} }

            div { class: "project_grid",
                for project in PROJECTS.iter() {
                    ProjectCard {
                        key: "{project.id}",
                        project: *project,
                        on_open: move |project: Project| {
                            tracing::debug!("projects.open: id={}", project.id);
                            selected.set(Some(project));
                        },
                    }
                }
            }
        }

        if let Some(project) = selected() {
            ProjectModal {
                key: "{project.id}",
                project,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_open: EventHandler<Project>) -> Element {
    let lang = crate::use_lang();
    let title = t(lang, &project.title_key());

    rsx! {
        div {
            class: "project_card",
            role: "button",
            tabindex: "0",
            "aria-label": "{title}",
            onclick: move |_| on_open.call(project),
            onkeydown: move |evt: KeyboardEvent| match evt.key() {
                Key::Enter => on_open.call(project),
                Key::Character(c) if c == " " => {
                    evt.prevent_default();
                    on_open.call(project);
                }
                _ => {}
            },
            img { class: "project_cover", src: project.cover, alt: "{title}", loading: "lazy" }
            div { class: "project_card_text",
                h3 { class: "project_title", "{title}" }
                p { class: "project_year", {t(lang, &project.year_key())} }
            }
        }
    }
}

#[component]
fn ProjectModal(project: Project, on_close: EventHandler<()>) -> Element {
    let lang = crate::use_lang();
    let carousel = use_carousel(project.images.len());
    let title = t(lang, &project.title_key());

    rsx! {
        Modal { label: title.clone(), on_close,
            CarouselView {
                carousel,
                images: project.images.to_vec(),
                alt: title.clone(),
            }
            div { class: "modal_body",
                div { class: "modal_meta",
                    span { class: "badge", {t(lang, &project.category_key())} }
                    span { class: "modal_year", {t(lang, &project.year_key())} }
                }
                h2 { class: "modal_title", "{title}" }
                h3 { class: "modal_subheading", {t(lang, "projects.details_heading")} }
                p { class: "modal_text", {t(lang, &project.details_key())} }
            }
        }
    }
}
