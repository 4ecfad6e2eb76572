use crate::types::{ContactReceipt, ContactRequest};
use dioxus::prelude::*;

/// Forward a consultation request to the configured transport.
///
/// Validation runs again here so a hand-crafted request never reaches Formspree.
#[dioxus::prelude::post("/api/contact")]
pub async fn submit_contact(request: ContactRequest) -> Result<ContactReceipt, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = request;
        Err(ServerFnError::new("submit_contact is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let request = request.normalized();
        let errors = request.validate();
        if !errors.is_empty() {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.form_name()).collect();
            tracing::info!("contact.submit: rejected invalid fields={}", fields.join(","));
            return Err(ServerFnError::new(format!(
                "Invalid contact request: {}",
                fields.join(", ")
            )));
        }

        let state = crate::state::AppState::global()
            .ok_or_else(|| ServerFnError::new("server state not initialized"))?;

        tracing::debug!("contact.submit: transport={}", state.transport.name());
        let transport = state.transport.deliver(&request).await.map_err(|e| {
            tracing::warn!("contact.submit: delivery failed: {e:#}");
            ServerFnError::new(format!("{e:#}"))
        })?;

        Ok(ContactReceipt { transport })
    }
}
