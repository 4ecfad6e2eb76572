use dioxus::prelude::*;
use ui::{Contact, Footer, Header, Hero, Intro, LanguageGate, Projects, Services, Story};

/// Landing page. Nothing below the language picker renders until a language is chosen.
#[component]
pub fn Home() -> Element {
    rsx! {
        LanguageGate {
            Header { on_home: true }
            main {
                Hero {}
                Intro {}
                Projects {}
                Services {}
                Story {}
                Contact {}
            }
            Footer { on_home: true }
        }
    }
}
