use std::collections::BTreeMap;

use validator::Validate;

use crate::modules::contact::model::ContactMessage;
use crate::modules::contact::service::ContactSender;

/// Pre-submission rules; stricter than what the endpoint itself enforces.
#[derive(Debug, Clone, Default, Validate)]
pub struct ContactFields {
    #[validate(length(min = 2, message = "Name must be at least 2 characters long"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 5, message = "Subject must be at least 5 characters long"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters long"))]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation stopped the submission; nothing was sent.
    Rejected,
    Sent,
    Failed,
}

/// One visitor's contact form session. Submission runs
/// editing → submitting → success or failure, and always lands back in
/// editing: success clears the fields, failure keeps them plus a notice
/// so the visitor can resubmit without retyping.
pub struct ContactForm {
    fields: ContactFields,
    phase: FormPhase,
    errors: BTreeMap<String, String>,
    last_error: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            phase: FormPhase::Editing,
            errors: BTreeMap::new(),
            last_error: None,
        }
    }

    pub fn set_name(&mut self, value: &str) {
        self.fields.name = value.to_string();
        self.errors.remove("name");
    }

    pub fn set_email(&mut self, value: &str) {
        self.fields.email = value.to_string();
        self.errors.remove("email");
    }

    pub fn set_subject(&mut self, value: &str) {
        self.fields.subject = value.to_string();
        self.errors.remove("subject");
    }

    pub fn set_message(&mut self, value: &str) {
        self.fields.message = value.to_string();
        self.errors.remove("message");
    }

    /// Checks every field independently and records all violations at
    /// once; returns whether the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = match self.fields.validate() {
            Ok(()) => BTreeMap::new(),
            Err(violations) => violations
                .field_errors()
                .into_iter()
                .filter_map(|(field, errors)| {
                    errors.first().map(|e| {
                        let message = e
                            .message
                            .clone()
                            .map(|m| m.into_owned())
                            .unwrap_or_else(|| e.code.to_string());
                        (field.to_string(), message)
                    })
                })
                .collect(),
        };
        self.errors.is_empty()
    }

    pub async fn submit<S: ContactSender>(&mut self, sender: &S) -> SubmitOutcome {
        if !self.validate() {
            return SubmitOutcome::Rejected;
        }

        self.phase = FormPhase::Submitting;
        self.last_error = None;

        let message = ContactMessage {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            subject: Some(self.fields.subject.clone()),
            message: self.fields.message.clone(),
        };

        let result = sender.send(&message).await;
        self.phase = FormPhase::Editing;

        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors.clear();
                SubmitOutcome::Sent
            }
            Err(err) => {
                log::error!("Contact form delivery failed: {:?}", err);
                self.last_error = Some("Failed to send message. Please try again.".to_string());
                SubmitOutcome::Failed
            }
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
