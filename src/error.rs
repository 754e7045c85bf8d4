//!
//! # Error handling
//!
//! `AppError` is the single failure type used across the application. Every
//! service operation returns either its result or one of these variants, and
//! the `ResponseError` impl maps each variant onto the corresponding HTTP
//! status with a JSON body. Internal detail (store errors, hashing failures)
//! is logged server-side and never forwarded to the caller.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// The application failure taxonomy.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input (HTTP 400).
    Validation(String),
    /// Duplicate resource, currently only a re-registered email (HTTP 409).
    Conflict(String),
    /// Bad credentials or a missing/invalid/expired token (HTTP 401).
    Authentication(String),
    /// Resource absent, or present but not owned by the caller (HTTP 404).
    NotFound(String),
    /// Unexpected store or infrastructure failure (HTTP 500). The message is
    /// for the log only.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Authentication(msg) => write!(f, "Authentication error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "error": msg
            })),
            AppError::Authentication(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// `sqlx::Error::RowNotFound` maps to `NotFound`; everything else is an
/// internal failure whose detail stays out of the response.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::Internal(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// JWT processing failures (bad signature, expiry, garbage input) are all
/// authentication failures from the caller's point of view.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Authentication(format!("Invalid token: {}", error))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
