use dioxus::prelude::*;

use crate::carousel::{use_carousel, CarouselView};
use crate::catalog::{service_by_slug, Service, ServiceSection, SERVICES};
use crate::i18n::t;
use crate::modal::Modal;
use crate::scroll::{is_mobile, use_viewport};

const SERVICES_CSS: Asset = asset!("/assets/styling/services.css");

#[component]
pub fn Services() -> Element {
    let lang = crate::use_lang();
    let viewport = use_viewport();
    let mut selected = use_signal(|| None::<Service>);

    let layout = if is_mobile(viewport().viewport_width) {
        "service_list stacked"
    } else {
        "service_list grid"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SERVICES_CSS }

        section { id: "services", class: "services",
            h2 { class: "section_title", {t(lang, "services.title")} }
            p { class: "section_subtitle", {t(lang, "services.subtitle")} }

            div { class: layout,
                for service in SERVICES.iter() {
                    ServiceCard {
                        key: "{service.slug}",
                        service: *service,
                        on_open: move |service: Service| {
                            tracing::debug!("services.open: slug={}", service.slug);
                            selected.set(Some(service));
                        },
                    }
                }
            }
        }

        if let Some(service) = selected() {
            ServiceModal {
                key: "{service.slug}",
                service,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service, on_open: EventHandler<Service>) -> Element {
    let lang = crate::use_lang();
    let title = t(lang, &service.title_key());

    rsx! {
        div {
            class: "service_card",
            role: "button",
            tabindex: "0",
            "aria-label": "{title}",
            onclick: move |_| on_open.call(service),
            onkeydown: move |evt: KeyboardEvent| match evt.key() {
                Key::Enter => on_open.call(service),
                Key::Character(c) if c == " " => {
                    evt.prevent_default();
                    on_open.call(service);
                }
                _ => {}
            },
            img { class: "service_image", src: service.image, alt: "{title}", loading: "lazy" }
            h3 { class: "service_title", "{title}" }
        }
    }
}

#[component]
fn ServiceModal(service: Service, on_close: EventHandler<()>) -> Element {
    let lang = crate::use_lang();
    let carousel = use_carousel(service.images.len());
    let title = t(lang, &service.title_key());

    rsx! {
        Modal { label: title.clone(), on_close,
            CarouselView {
                carousel,
                images: service.images.to_vec(),
                alt: title.clone(),
            }
            div { class: "modal_body",
                h2 { class: "modal_title", "{title}" }
                p { class: "modal_text", {t(lang, &service.description_key())} }
                FeatureList { service }
                Link {
                    class: "btn primary",
                    to: format!("/services/{}", service.slug),
                    {t(lang, "services.learn_more")}
                }
            }
        }
    }
}

#[component]
fn FeatureList(service: Service) -> Element {
    let lang = crate::use_lang();
    rsx! {
        h3 { class: "features_heading", {t(lang, "services.features_heading")} }
        ul { class: "feature_list",
            for key in service.feature_keys() {
                li { key: "{key}", {t(lang, &key)} }
            }
        }
    }
}

/// Detail page for `/services/:slug`. Unknown slugs render `not_found`.
#[component]
pub fn ServicePage(slug: String, not_found: Element) -> Element {
    let lang = crate::use_lang();

    let Some(service) = service_by_slug(&slug).copied() else {
        tracing::debug!("services.unknown_slug: slug={slug}");
        return not_found;
    };
    let title = t(lang, &service.title_key());
    let page_title = format!("{title} | {}", t(lang, "app.name"));

    rsx! {
        document::Link { rel: "stylesheet", href: SERVICES_CSS }
        document::Title { "{page_title}" }

        article { class: "service_page",
            header { class: "service_page_hero",
                img { class: "service_page_image", src: service.image, alt: "{title}" }
                if service.has_detail_sections() {
                    h1 { {t(lang, "food_systems.heading")} }
                    p { class: "service_tagline", {t(lang, "food_systems.tagline")} }
                    p { class: "service_tagline secondary", {t(lang, "food_systems.tagline2")} }
                } else {
                    h1 { "{title}" }
                }
            }

            section { class: "service_page_body",
                p { class: "service_description", {t(lang, &service.description_key())} }
                FeatureList { service }
            }

            for (idx, section) in service.sections.iter().enumerate() {
                DetailSection { key: "{section.title_key}", section: *section, flipped: idx % 2 == 1 }
            }

            div { class: "service_page_actions",
                Link { class: "btn", to: "/", {t(lang, "service_page.back")} }
                ContactLink {}
            }
        }
    }
}

/// Back to the landing page's contact form, keeping the chosen language.
#[component]
fn ContactLink() -> Element {
    let lang = crate::use_lang();
    let navigator = use_navigator();
    rsx! {
        a {
            class: "btn primary",
            href: "/#contact",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                crate::header::navigate_to_section(navigator, "contact");
            },
            {t(lang, "service_page.cta")}
        }
    }
}

#[component]
fn DetailSection(section: ServiceSection, flipped: bool) -> Element {
    let lang = crate::use_lang();
    let title = t(lang, section.title_key);
    rsx! {
        section { class: if flipped { "detail_section flipped" } else { "detail_section" },
            img { class: "detail_image", src: section.image, alt: "{title}", loading: "lazy" }
            div { class: "detail_text",
                h2 { "{title}" }
                for key in section.paragraph_keys.iter() {
                    p { key: "{key}", {t(lang, key)} }
                }
            }
        }
    }
}
