use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::types::{ContactRequest, SubmitTransport};

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

fn request_label(request: &ContactRequest) -> String {
    format!(
        "{} (desc_len={})",
        email_domain(&request.email),
        request.project_description.len()
    )
}

/// Delivers a contact request somewhere a human will read it.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, request: &ContactRequest) -> Result<SubmitTransport>;
}

/// Formspree delivery: one form-encoded attempt, then one JSON attempt.
pub struct FormspreeTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl FormspreeTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building Formspree HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn send_form(&self, request: &ContactRequest) -> Result<()> {
        let form = request
            .form_fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            });

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .context("form submission request")?;

        let status = response.status();
        debug!("contact.formspree.send_form: status={}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("form submission rejected with status {status}: {body}");
        }
        Ok(())
    }

    async fn send_json(&self, request: &ContactRequest) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request.json_payload())
            .send()
            .await
            .context("JSON submission request")?;

        let status = response.status();
        debug!("contact.formspree.send_json: status={}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Form submission failed with status: {status}: {body}");
        }
        Ok(())
    }
}

#[async_trait]
impl ContactTransport for FormspreeTransport {
    fn name(&self) -> &'static str {
        "formspree"
    }

    async fn deliver(&self, request: &ContactRequest) -> Result<SubmitTransport> {
        info!("contact.formspree.deliver: from={}", request_label(request));

        match self.send_form(request).await {
            Ok(()) => {
                info!("contact.formspree.deliver: delivered via form");
                Ok(SubmitTransport::Multipart)
            }
            Err(e) => {
                warn!("contact.formspree.deliver: form attempt failed, trying JSON: {e:#}");
                self.send_json(request).await?;
                info!("contact.formspree.deliver: delivered via JSON fallback");
                Ok(SubmitTransport::Json)
            }
        }
    }
}

/// Local development: print the submission instead of sending it.
pub struct ConsoleTransport;

#[async_trait]
impl ContactTransport for ConsoleTransport {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn deliver(&self, request: &ContactRequest) -> Result<SubmitTransport> {
        println!("\n📨 CONTACT REQUEST (Local Mode - Not Sent)");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for (name, value) in request.form_fields() {
            println!("{name}: {value}");
        }
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        Ok(SubmitTransport::Console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("ana@example.cr"), "example.cr");
        assert_eq!(email_domain("nobody"), "invalid");
    }

    #[tokio::test]
    async fn test_console_transport_reports_console() {
        let outcome = ConsoleTransport
            .deliver(&ContactRequest::default())
            .await
            .unwrap();
        assert_eq!(outcome, SubmitTransport::Console);
    }
}
