use serde::{Deserialize, Serialize};

/// Fields of the consultation form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    ContactTime,
    ProjectDescription,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::ContactTime,
        ContactField::ProjectDescription,
    ];

    /// Name used on the wire and as the HTML `name`/`id` attribute.
    pub fn form_name(&self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::ContactTime => "contactTime",
            ContactField::ProjectDescription => "projectDescription",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::ContactTime)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    /// Translation key describing the problem.
    pub message_key: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Free text, may be empty.
    pub contact_time: String,
    pub project_description: String,
}

impl ContactRequest {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::ContactTime => &self.contact_time,
            ContactField::ProjectDescription => &self.project_description,
        }
    }

    pub fn set_value(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::ContactTime => self.contact_time = value,
            ContactField::ProjectDescription => self.project_description = value,
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            contact_time: self.contact_time.trim().to_string(),
            project_description: self.project_description.trim().to_string(),
        }
    }

    /// Returns one error per offending field, in form order. Empty means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in ContactField::ALL {
            let value = self.value(field).trim();
            if field.is_required() && value.is_empty() {
                errors.push(FieldError {
                    field,
                    message_key: "contact.error.required",
                });
                continue;
            }
            if field == ContactField::Email && !looks_like_email(value) {
                errors.push(FieldError {
                    field,
                    message_key: "contact.error.email",
                });
            }
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Field pairs for the form-encoded submission.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        ContactField::ALL
            .iter()
            .map(|field| (field.form_name(), self.value(*field).to_string()))
            .collect()
    }

    /// Body for the JSON fallback submission.
    pub fn json_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "fullName": self.full_name,
            "email": self.email,
            "phone": self.phone,
            "contactTime": self.contact_time,
            "projectDescription": self.project_description,
            "_replyto": self.email,
            "_subject": CONTACT_SUBJECT,
        })
    }
}

pub const CONTACT_SUBJECT: &str = "New Consultation Request from Permaguanacaste Website";

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Which submission stage delivered the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitTransport {
    Multipart,
    Json,
    /// Local mode: logged, not sent.
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub transport: SubmitTransport,
}

/// Non-secret settings the client may read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub local_mode: bool,
    pub whatsapp_number: String,
}
