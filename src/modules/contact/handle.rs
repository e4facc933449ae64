use actix_web::{post, web};

use crate::api::error;
use crate::modules::contact::model::{ContactMessage, ContactResponse};
use crate::modules::contact::service::{ContactSender, EmailService};
use crate::utils::ValidatedJson;

#[post("/contact-form")]
pub async fn submit_contact_form(
    email_service: web::Data<EmailService>,
    form_data: ValidatedJson<ContactMessage>,
) -> Result<web::Json<ContactResponse>, error::Error> {
    log::info!("Received contact form submission");
    email_service.send(&form_data.0).await?;
    Ok(web::Json(ContactResponse { success: true }))
}
