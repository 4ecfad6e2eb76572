use dioxus::prelude::*;
use ui::{Footer, Header, NotFound, ServicePage};

#[component]
pub fn ServiceDetail(slug: String) -> Element {
    rsx! {
        Header { on_home: false }
        main {
            ServicePage { slug, not_found: rsx! { NotFound {} } }
        }
        Footer { on_home: false }
    }
}
