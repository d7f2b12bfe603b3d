use uuid::Uuid;

/// A persisted contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Raw submission as it arrives at the boundary, before normalization.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed normalization and is ready to be stored.
///
/// Fields are trimmed and non-empty; `email` is lowercase. The only way to
/// obtain one is [`NewContactMessage::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contact message validation failed: {}", .0.join(", "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

pub fn required_message(field: &str) -> String {
    format!("{field} is required")
}

fn normalize(field: &str, value: Option<String>, errors: &mut Vec<String>) -> String {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        errors.push(required_message(field));
    }
    trimmed.to_string()
}

impl NewContactMessage {
    pub fn parse(input: ContactSubmission) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();
        let name = normalize("name", input.name, &mut errors);
        let email = normalize("email", input.email, &mut errors).to_lowercase();
        let message = normalize("message", input.message, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }
        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Materializes the record with store-assigned identity and timestamp.
    /// New records always start unread.
    pub fn into_record(
        self,
        id: Uuid,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            read: false,
            created_at,
        }
    }
}
