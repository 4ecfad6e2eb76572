use dioxus::prelude::*;
use dioxus::router::Navigator;
use std::time::Duration;

use crate::catalog::{NavItem, NAV_ITEMS, SERVICES};
use crate::i18n::t;
use crate::scroll::{header_appearance, is_mobile, use_viewport, HeaderAppearance};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Site header. On the landing page it reacts to scrolling over the hero;
/// elsewhere it renders in its solid state.
#[component]
pub fn Header(on_home: bool) -> Element {
    let lang = crate::use_lang();
    let metrics = use_viewport();
    let mut menu_open = use_signal(|| false);
    let mut services_open = use_signal(|| false);

    let m = metrics();
    let look = if on_home {
        header_appearance(m.scroll_y, m.hero_height)
    } else {
        HeaderAppearance::solid()
    };
    let mobile = is_mobile(m.viewport_width);

    // The sidebar only exists at mobile widths.
    use_effect(move || {
        if !is_mobile(metrics().viewport_width) && *menu_open.peek() {
            menu_open.set(false);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { class: look.class(), style: look.style(),
            div { class: "header_inner",
                Link { class: "header_logo", to: "/",
                    img { src: "/images/logo.png", alt: {t(lang, "common.logo_alt")} }
                    span { class: "header_brand", {t(lang, "app.name")} }
                }

                if mobile {
                    button {
                        class: if menu_open() { "menu_toggle open" } else { "menu_toggle" },
                        r#type: "button",
                        "aria-label": {t(lang, "nav.toggle")},
                        "aria-expanded": if menu_open() { "true" } else { "false" },
                        onclick: move |_| menu_open.toggle(),
                        span { class: "menu_bar" }
                        span { class: "menu_bar" }
                        span { class: "menu_bar" }
                    }
                } else {
                    nav { class: "header_nav",
                        for item in NAV_ITEMS.iter().copied() {
                            if item.anchor == "services" {
                                div {
                                    key: "{item.anchor}",
                                    class: "nav_dropdown",
                                    onmouseenter: move |_| services_open.set(true),
                                    onmouseleave: move |_| services_open.set(false),
                                    NavAnchor { item, on_home, on_select: move |_| services_open.set(false) }
                                    if services_open() {
                                        ServicesMenu { on_select: move |_| services_open.set(false) }
                                    }
                                }
                            } else {
                                NavAnchor {
                                    key: "{item.anchor}",
                                    item,
                                    on_home,
                                    pill: item.anchor == "contact",
                                    on_select: move |_| {},
                                }
                            }
                        }
                    }
                }
            }
        }

        if mobile && menu_open() {
            div { class: "sidebar_backdrop", onclick: move |_| menu_open.set(false) }
            aside { class: "sidebar", role: "dialog", "aria-modal": "true",
                nav { class: "sidebar_nav",
                    for item in NAV_ITEMS.iter().copied() {
                        NavAnchor {
                            key: "{item.anchor}",
                            item,
                            on_home,
                            on_select: move |_| menu_open.set(false),
                        }
                        if item.anchor == "services" {
                            ServicesMenu { on_select: move |_| menu_open.set(false) }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServicesMenu(on_select: EventHandler<()>) -> Element {
    let lang = crate::use_lang();
    rsx! {
        ul { class: "services_menu",
            for service in SERVICES.iter() {
                li { key: "{service.slug}",
                    Link {
                        class: "services_menu_link",
                        to: format!("/services/{}", service.slug),
                        onclick: move |_| on_select.call(()),
                        {t(lang, &service.title_key())}
                    }
                }
            }
        }
    }
}

/// Link to a landing-page section. From other routes it navigates home first
/// and then scrolls, keeping the chosen language.
#[component]
pub(crate) fn NavAnchor(
    item: NavItem,
    on_home: bool,
    #[props(default)] pill: bool,
    on_select: EventHandler<()>,
) -> Element {
    let lang = crate::use_lang();
    let navigator = use_navigator();
    let class = if pill { "nav_link nav_pill" } else { "nav_link" };
    let anchor = item.anchor;
    let href = if on_home { format!("#{anchor}") } else { item.href() };

    rsx! {
        a {
            class,
            href,
            onclick: move |evt: MouseEvent| {
                on_select.call(());
                if on_home {
                    return;
                }
                evt.prevent_default();
                navigate_to_section(navigator, anchor);
            },
            {t(lang, item.label_key)}
        }
    }
}

/// Route to the landing page, then scroll once the section has rendered.
pub(crate) fn navigate_to_section(navigator: Navigator, anchor: &'static str) {
    navigator.push("/");
    spawn(async move {
        gloo_timers::future::sleep(Duration::from_millis(50)).await;
        scroll_to_section(anchor).await;
    });
}

fn scroll_script(anchor: &str) -> String {
    format!(
        "const el = document.getElementById('{anchor}'); if (el) {{ el.scrollIntoView({{ behavior: 'smooth' }}); }} return '';"
    )
}

async fn scroll_to_section(anchor: &str) {
    if let Err(e) = document::eval(&scroll_script(anchor)).await {
        tracing::debug!("header.scroll_failed: anchor={anchor} error={e:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_script_targets_anchor() {
        let js = scroll_script("contact");
        assert!(js.contains("getElementById('contact')"));
        assert!(js.contains("scrollIntoView"));
    }

    #[test]
    fn section_navigation_accepts_router_navigator() {
        let navigate: fn(Navigator, &'static str) = navigate_to_section;
        let _ = navigate;
    }
}
