use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application error taxonomy.
///
/// Every variant is recovered at the request boundary and rendered as a
/// `{"error": "<message>"}` JSON body; nothing propagates to the caller as an
/// unhandled fault. Token and credential failures are expected and stay quiet;
/// `MalformedCredential`, `Database` and `Internal` are logged before the
/// response is built.
#[derive(Debug)]
pub enum AppError {
    /// No token/code was supplied at all.
    MissingCredential(String),
    /// Signature, structure or algorithm mismatch on a supplied token.
    InvalidToken(String),
    /// Wrong password.
    Authentication(String),
    /// Class or user lookup miss.
    NotFound(String),
    /// A stored password hash that is not a valid `salt$hash` composite.
    /// Distinct from a wrong password: this is a data-integrity problem.
    MalformedCredential(String),
    BadRequest(String),
    Validation(String),
    Database(Error),
    Internal(Error),
}

impl AppError {
    pub fn missing_credential(msg: impl Into<String>) -> Self {
        Self::MissingCredential(msg.into())
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn malformed_credential(msg: impl Into<String>) -> Self {
        Self::MalformedCredential(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Database(err.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredential(_) | Self::InvalidToken(_) | Self::Authentication(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MalformedCredential(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingCredential(msg)
            | Self::InvalidToken(msg)
            | Self::Authentication(msg)
            | Self::NotFound(msg)
            | Self::MalformedCredential(msg)
            | Self::BadRequest(msg)
            | Self::Validation(msg) => msg.clone(),
            Self::Database(err) | Self::Internal(err) => err.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedCredential(msg) => {
                tracing::error!(error = %msg, "corrupt stored credential");
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
            }
            _ => {}
        }

        let body = Json(json!({
            "error": self.message()
        }));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
