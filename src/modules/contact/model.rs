use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactMessage {
    fn trimmed_subject(&self) -> Option<&str> {
        self.subject.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Subject line for the outgoing email.
    pub fn subject_line(&self) -> String {
        match self.trimmed_subject() {
            Some(subject) => subject.to_string(),
            None => format!("New Contact Form Message from {}", self.name),
        }
    }

    /// Subject as shown inside the rendered template.
    pub fn display_subject(&self) -> &str {
        self.trimmed_subject().unwrap_or("No subject provided")
    }
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
}
