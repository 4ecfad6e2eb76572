//! This crate contains all shared UI for the workspace.

mod catalog;
pub use catalog::{service_by_slug, Project, Service, NAV_ITEMS, PROJECTS, SERVICES};

mod i18n;
pub use i18n::{t, use_lang, use_language, I18nProvider, Lang, LanguageState};

mod language_gate;
pub use language_gate::LanguageGate;

mod scroll;
pub use scroll::{header_appearance, is_mobile, HeaderAppearance, ScrollProvider};

mod carousel;
pub use carousel::{Carousel, CAROUSEL_INTERVAL};

mod modal;

mod header;
pub use header::Header;

mod hero;
pub use hero::{Hero, Intro, Story};

mod projects;
pub use projects::Projects;

mod services;
pub use services::{ServicePage, Services};

mod contact;
pub use contact::{use_whatsapp_number, Contact};

mod footer;
pub use footer::Footer;

mod not_found;
pub use not_found::NotFound;

mod theme;
pub use theme::SiteTheme;

mod toast;
pub use toast::{use_toasts, ToastProvider};
