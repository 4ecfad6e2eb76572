use api::config::DEFAULT_WHATSAPP_NUMBER;
use api::types::{ContactField, ContactRequest, FieldError};
use dioxus::prelude::*;

use crate::catalog::{display_phone, whatsapp_url};
use crate::i18n::{t, Lang};
use crate::toast::use_toasts;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Sent,
}

/// Configured WhatsApp number, or the built-in one until the server answers.
pub fn use_whatsapp_number() -> String {
    let cfg = use_resource(|| async move { api::public_config().await });
    let number = match &*cfg.read() {
        Some(Ok(cfg)) => cfg.whatsapp_number.clone(),
        _ => DEFAULT_WHATSAPP_NUMBER.to_string(),
    };
    number
}

fn label_key(field: ContactField) -> &'static str {
    match field {
        ContactField::FullName => "contact.form.full_name",
        ContactField::Email => "contact.form.email",
        ContactField::Phone => "contact.form.phone",
        ContactField::ContactTime => "contact.form.contact_time",
        ContactField::ProjectDescription => "contact.form.project_description",
    }
}

fn placeholder(lang: Lang, field: ContactField) -> String {
    match field {
        ContactField::Phone => t(lang, "contact.form.phone_ph"),
        ContactField::ContactTime => t(lang, "contact.form.contact_time_ph"),
        ContactField::ProjectDescription => t(lang, "contact.form.project_description_ph"),
        ContactField::FullName | ContactField::Email => String::new(),
    }
}

/// Failure notice body naming the WhatsApp number visitors can fall back to.
fn failure_body(lang: Lang, whatsapp_number: &str) -> String {
    t(lang, "contact.failure.body").replace("{whatsapp}", &display_phone(whatsapp_number))
}

fn error_for(errors: &[FieldError], field: ContactField) -> Option<&'static str> {
    errors
        .iter()
        .find(|err| err.field == field)
        .map(|err| err.message_key)
}

#[component]
pub fn Contact() -> Element {
    let lang = crate::use_lang();
    let toasts = use_toasts();
    let whatsapp_number = use_whatsapp_number();

    let mut request = use_signal(ContactRequest::default);
    let mut phase = use_signal(|| FormPhase::Editing);
    // Errors stay hidden until the first submit attempt.
    let mut attempted = use_signal(|| false);

    let errors = request.read().validate();
    let shown_errors = if attempted() { errors.clone() } else { Vec::new() };
    let submitting = phase() == FormPhase::Submitting;
    let whatsapp = whatsapp_url(&whatsapp_number, &t(lang, "contact.whatsapp_greeting"));
    let failure_message = failure_body(lang, &whatsapp_number);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if phase() == FormPhase::Submitting {
            return;
        }
        attempted.set(true);

        let payload = request.read().normalized();
        if !payload.is_valid() {
            tracing::debug!("contact.form: blocked invalid submit");
            return;
        }

        phase.set(FormPhase::Submitting);
        let failure_message = failure_message.clone();
        spawn(async move {
            match api::submit_contact(payload).await {
                Ok(receipt) => {
                    tracing::debug!("contact.form: sent via {:?}", receipt.transport);
                    phase.set(FormPhase::Sent);
                }
                Err(e) => {
                    tracing::warn!("contact.form: submit failed: {e}");
                    toasts.error(
                        t(lang, "contact.failure.title"),
                        Some(failure_message),
                    );
                    phase.set(FormPhase::Editing);
                }
            }
        });
    };

    let reset = move |_| {
        request.set(ContactRequest::default());
        attempted.set(false);
        phase.set(FormPhase::Editing);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        section { id: "contact", class: "contact",
            div { class: "contact_intro",
                h2 { class: "section_title", {t(lang, "contact.title")} }
                p { class: "section_subtitle", {t(lang, "contact.subtitle")} }
                div { class: "contact_direct",
                    h3 { {t(lang, "contact.direct.heading")} }
                    p { {t(lang, "contact.direct.body")} }
                    a {
                        class: "btn whatsapp",
                        href: "{whatsapp}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t(lang, "contact.direct.whatsapp")}
                    }
                }
            }

            div { class: "contact_card",
                if phase() == FormPhase::Sent {
                    div { class: "contact_success", role: "status",
                        h3 { {t(lang, "contact.form.success_title")} }
                        p { {t(lang, "contact.form.success_message")} }
                        button { class: "btn", r#type: "button", onclick: reset,
                            {t(lang, "contact.form.new_message")}
                        }
                    }
                } else {
                    form { class: "contact_form", novalidate: true, onsubmit: on_submit,
                        h3 { class: "contact_form_heading", {t(lang, "contact.form.heading")} }

                        for field in ContactField::ALL {
                            FormField {
                                key: "{field.form_name()}",
                                field,
                                value: request.read().value(field).to_string(),
                                error: error_for(&shown_errors, field),
                                disabled: submitting,
                                on_input: move |value: String| {
                                    request.with_mut(|r| r.set_value(field, value));
                                },
                            }
                        }

                        button {
                            class: "btn primary contact_submit",
                            r#type: "submit",
                            disabled: submitting || (attempted() && !errors.is_empty()),
                            if submitting {
                                {t(lang, "contact.form.submitting")}
                            } else {
                                {t(lang, "contact.form.submit")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(
    field: ContactField,
    value: String,
    #[props(!optional)] error: Option<&'static str>,
    disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let lang = crate::use_lang();
    let name = field.form_name();
    let label = t(lang, label_key(field));
    let placeholder = placeholder(lang, field);
    let class = if error.is_some() { "field invalid" } else { "field" };
    let error_id = format!("{name}-error");

    rsx! {
        div { class,
            label { r#for: name,
                "{label}"
                if field.is_required() {
                    span { class: "required_mark", " *" }
                }
            }
            if field == ContactField::ProjectDescription {
                textarea {
                    id: name,
                    name,
                    rows: "5",
                    placeholder: "{placeholder}",
                    required: true,
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": "{error_id}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: name,
                    name,
                    r#type: match field {
                        ContactField::Email => "email",
                        ContactField::Phone => "tel",
                        _ => "text",
                    },
                    placeholder: "{placeholder}",
                    required: field.is_required(),
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": "{error_id}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            }
            if let Some(key) = error {
                p { id: "{error_id}", class: "field_error", role: "alert", {t(lang, key)} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static NUMBER: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    #[component]
    fn NumberReader() -> Element {
        let number = use_whatsapp_number();
        NUMBER.with(|seen| *seen.borrow_mut() = Some(number));
        rsx! {}
    }

    #[test]
    fn whatsapp_number_defaults_until_config_arrives() {
        let mut dom = VirtualDom::new(NumberReader);
        dom.rebuild_in_place();
        let number = NUMBER.with(|seen| seen.borrow_mut().take());
        assert_eq!(number.as_deref(), Some(DEFAULT_WHATSAPP_NUMBER));
    }

    #[test]
    fn every_field_has_translated_label() {
        for field in ContactField::ALL {
            for lang in Lang::ALL {
                let key = label_key(field);
                assert_ne!(t(lang, key), key);
            }
        }
    }

    #[test]
    fn error_lookup_picks_matching_field() {
        let errors = ContactRequest::default().validate();
        assert_eq!(error_for(&errors, ContactField::Email), Some("contact.error.required"));
        assert_eq!(error_for(&errors, ContactField::ContactTime), None);
    }

    #[test]
    fn failure_notice_uses_configured_number() {
        let body = failure_body(Lang::En, "50670001234");
        assert!(body.contains("+506 7000 1234"));
        assert!(!body.contains("{whatsapp}"));
        assert!(failure_body(Lang::Es, DEFAULT_WHATSAPP_NUMBER).contains("+506 8302 1304"));
    }

    #[test]
    fn optional_field_has_placeholder_hint() {
        assert!(!placeholder(Lang::Es, ContactField::ContactTime).is_empty());
        assert!(placeholder(Lang::En, ContactField::FullName).is_empty());
    }
}
