use chrono::Datelike;
use dioxus::prelude::*;

use crate::catalog::{
    whatsapp_url, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_TEL, FACEBOOK_URL,
    INSTAGRAM_URL, NAV_ITEMS,
};
use crate::header::NavAnchor;
use crate::i18n::t;

#[component]
pub fn Footer(on_home: bool) -> Element {
    let lang = crate::use_lang();
    let whatsapp_number = crate::use_whatsapp_number();
    let year = chrono::Local::now().year();
    let whatsapp = whatsapp_url(&whatsapp_number, &t(lang, "contact.whatsapp_greeting"));
    let app_name = t(lang, "app.name");
    let rights = t(lang, "footer.rights");

    rsx! {
        footer { class: "site_footer",
            div { class: "footer_columns",
                div { class: "footer_column",
                    h3 { {t(lang, "footer.contact")} }
                    a { href: "tel:{CONTACT_PHONE_TEL}", "{CONTACT_PHONE_DISPLAY}" }
                    a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    p { {t(lang, "footer.province")} }
                    p { {t(lang, "footer.country")} }
                }
                div { class: "footer_column",
                    h3 { {t(lang, "footer.navigation")} }
                    ul {
                        for item in NAV_ITEMS.iter() {
                            li { key: "{item.anchor}",
                                NavAnchor { item: *item, on_home, on_select: move |_| {} }
                            }
                        }
                    }
                }
                div { class: "footer_column",
                    h3 { {t(lang, "footer.follow")} }
                    div { class: "footer_social",
                        a { href: FACEBOOK_URL, target: "_blank", rel: "noopener noreferrer", "Facebook" }
                        a { href: INSTAGRAM_URL, target: "_blank", rel: "noopener noreferrer", "Instagram" }
                        a { href: "{whatsapp}", target: "_blank", rel: "noopener noreferrer", "WhatsApp" }
                    }
                }
            }
            div { class: "footer_bottom",
                p { class: "footer_tagline", {t(lang, "footer.tagline")} }
                p { class: "footer_copyright",
                    "© {year} {app_name}. {rights}"
                }
            }
        }
    }
}
