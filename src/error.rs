use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures raised by a `UserStore` adapter
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
    #[error("store did not return an id for the inserted user")]
    MissingId,
}

/// Everything a tracker operation can fail with
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("username is empty")]
    InvalidUsername,
    /// Unknown user while appending an exercise
    #[error("no user with that id")]
    InvalidUser,
    #[error("date could not be parsed")]
    InvalidDate,
    #[error("query parameter `{0}` is invalid")]
    InvalidParameter(&'static str),
    /// Unknown user while reading logs
    #[error("user not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TrackerError {
    /// Body sent to clients for the validation and lookup failures.
    ///
    /// These strings are the wire contract existing front-ends match on.
    pub fn sentinel(&self) -> Option<String> {
        let text = match self {
            TrackerError::InvalidUsername => "invalid username".to_string(),
            TrackerError::InvalidUser => "invalid user".to_string(),
            TrackerError::InvalidDate => "invalid date".to_string(),
            TrackerError::InvalidParameter(name) => format!("invalid {}", name),
            TrackerError::NotFound => "user not founded".to_string(),
            TrackerError::Store(_) => return None,
        };
        Some(text)
    }
}

impl ResponseError for TrackerError {
    fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.sentinel() {
            Some(text) => HttpResponse::Ok().json(text),
            None => {
                log::error!("Store failure: {}", self);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Database error"
                }))
            }
        }
    }
}
