use askama::Template;
use chrono::Datelike;
use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::api::error;
use crate::modules::contact::model::ContactMessage;
use crate::ENV;

#[derive(Template)]
#[template(path = "email/contact_form.html")]
struct ContactFormEmailHtml<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message_lines: Vec<&'a str>,
    year: i32,
}

#[derive(Template)]
#[template(path = "email/contact_form.txt")]
struct ContactFormEmailText<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Seam between the submission flow and the actual relay; the form state
/// machine and the HTTP handler only ever see this trait.
#[async_trait::async_trait]
pub trait ContactSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), error::SystemError>;
}

/// SMTP-backed sender. Submissions are delivered to the configured site
/// owner address, rendered with a fixed HTML + plain text template pair.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    to_address: String,
}

impl EmailService {
    pub fn from_env() -> Result<Self, error::SystemError> {
        let credentials =
            Credentials::new(ENV.smtp_username.clone(), ENV.smtp_password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&ENV.smtp_host)?
            .port(ENV.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: ENV.from_email.clone(),
            to_address: ENV.contact_email.clone(),
        })
    }

    async fn send_multipart_email(
        &self,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), error::SystemError> {
        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(self.to_address.parse()?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        self.mailer.send(email).await?;

        log::info!("Contact form email sent to {}", self.to_address);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ContactSender for EmailService {
    async fn send(&self, message: &ContactMessage) -> Result<(), error::SystemError> {
        let html = ContactFormEmailHtml {
            name: &message.name,
            email: &message.email,
            subject: message.display_subject(),
            message_lines: message.message.lines().collect(),
            year: chrono::Utc::now().year(),
        }
        .render()?;

        let text = ContactFormEmailText {
            name: &message.name,
            email: &message.email,
            subject: message.display_subject(),
            message: &message.message,
        }
        .render()?;

        self.send_multipart_email(&message.subject_line(), &text, &html).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(subject: Option<&str>) -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: subject.map(str::to_string),
            message: "First line\nSecond line".to_string(),
        }
    }

    #[test]
    fn subject_line_falls_back_to_sender_name() {
        assert_eq!(message(Some("Commission inquiry")).subject_line(), "Commission inquiry");
        assert_eq!(message(None).subject_line(), "New Contact Form Message from Ada");
        assert_eq!(message(Some("  ")).subject_line(), "New Contact Form Message from Ada");
    }

    #[test]
    fn html_template_renders_fields_and_breaks_message_lines() {
        let msg = message(None);
        let html = ContactFormEmailHtml {
            name: &msg.name,
            email: &msg.email,
            subject: msg.display_subject(),
            message_lines: msg.message.lines().collect(),
            year: 2026,
        }
        .render()
        .unwrap();

        assert!(html.contains("Ada"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("No subject provided"));
        assert!(html.contains("First line<br>"));
        assert!(html.contains("Second line"));
    }

    #[test]
    fn text_template_renders_all_fields() {
        let msg = message(Some("Commission inquiry"));
        let text = ContactFormEmailText {
            name: &msg.name,
            email: &msg.email,
            subject: msg.display_subject(),
            message: &msg.message,
        }
        .render()
        .unwrap();

        assert!(text.contains("Name: Ada"));
        assert!(text.contains("Email: ada@example.com"));
        assert!(text.contains("Subject: Commission inquiry"));
        assert!(text.contains("First line\nSecond line"));
    }
}
