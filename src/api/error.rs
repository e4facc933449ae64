use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::borrow::Cow;

use crate::ENV;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Internal Server Error")]
    InternalServer,
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub error: Cow<'static, str>,
}

impl Error {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match *self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());

        res.insert_header(("Access-Control-Allow-Origin", ENV.frontend_url.as_str()));
        res.insert_header(("Access-Control-Allow-Credentials", "true"));

        match self {
            Error::BadRequest(msg) | Error::NotFound(msg) => {
                res.json(ErrorBody { error: msg.clone() })
            }
            Error::InternalServer => res.json(ErrorBody { error: "Internal Server Error".into() }),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // sqlx errors
    #[error("Database Error: {0}")]
    DatabaseError(Cow<'static, str>),
    // filesystem errors from the upload store
    #[error("IO Error")]
    IoError(#[from] std::io::Error),
    // email relay errors
    #[error("SMTP Error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),
    #[error("Email Message Error")]
    EmailBuild(#[from] lettre::error::Error),
    #[error("Email Address Error")]
    EmailAddress(#[from] lettre::address::AddressError),
    #[error("Template Render Error")]
    TemplateError(#[from] askama::Error),
    // Custom Errors
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Internal System Error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        match value {
            SystemError::BadRequest(msg) => Error::BadRequest(msg),
            SystemError::NotFound(msg) => Error::NotFound(msg),
            _ => {
                log::error!("Internal Server Error: {:?}", value);
                Error::InternalServer
            }
        }
    }
}

impl From<sqlx::Error> for SystemError {
    fn from(err: sqlx::Error) -> Self {
        log::error!("{:?}", err);
        if let sqlx::Error::Database(db_err) = &err {
            return SystemError::DatabaseError(db_err.message().to_string().into());
        }
        SystemError::InternalError(Box::new(err))
    }
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }
}
