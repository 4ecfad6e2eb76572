use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;600&family=Montserrat:wght@300;400;500;600&display=swap";

/// Global palette, typography and shared button styles.
#[component]
pub fn SiteTheme() -> Element {
    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: FONTS_URL }
        document::Link { rel: "stylesheet", href: THEME_CSS }
    }
}
