pub mod form;
pub mod handle;
pub mod model;
pub mod route;
pub mod service;

pub use form::{ContactFields, ContactForm, FormPhase, SubmitOutcome};
pub use model::{ContactMessage, ContactResponse};
pub use service::{ContactSender, EmailService};
