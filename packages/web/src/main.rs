use dioxus::prelude::*;
use std::env;

use views::{Home, PageNotFound, ServiceDetail};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/services/:slug")]
    ServiceDetail { slug: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use std::sync::Arc;

    api::config::load_dotenv();

    let config = match api::config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let state = match api::state::AppState::from_config(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            eprintln!("Failed to initialize AppState: {e:#}");
            std::process::exit(1);
        }
    };

    if let Err(e) = api::state::AppState::set_global(state) {
        eprintln!("Failed to install AppState: {e:#}");
        std::process::exit(1);
    }
    eprintln!("✓ Server initialization complete");
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "production".to_string());

    eprintln!("startup: IP={ip} PORT={port} APP_MODE={mode}");

    #[cfg(feature = "server")]
    {
        let endpoint = env::var("FORMSPREE_ENDPOINT")
            .unwrap_or_else(|_| api::config::DEFAULT_FORMSPREE_ENDPOINT.to_string());
        eprintln!(
            "startup: FORMSPREE_ENDPOINT={}",
            api::state::redact_endpoint(&endpoint)
        );
    }

    log_missing_envs("contact", &["FORMSPREE_ENDPOINT", "WHATSAPP_NUMBER"]);
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).ok().is_none())
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!("startup: using defaults for {group} envs: {}", missing.join(", "));
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            DocumentHead {}
            ui::ScrollProvider {
                ui::ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Title and description follow the chosen language.
#[component]
fn DocumentHead() -> Element {
    let lang = ui::use_lang();
    rsx! {
        document::Title { {ui::t(lang, "app.title")} }
        document::Meta { name: "description", content: ui::t(lang, "app.description") }
    }
}
