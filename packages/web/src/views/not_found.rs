use dioxus::prelude::*;
use ui::{Footer, Header, NotFound};

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!("route.not_found: path=/{}", segments.join("/"));
    rsx! {
        Header { on_home: false }
        main { NotFound {} }
        Footer { on_home: false }
    }
}
