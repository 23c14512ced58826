use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::domain::error::DomainError;

/// json for every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    pub fn status_and_detail(&self) -> (StatusCode, &'static str) {
        let ApiError::Domain(domain) = self;
        match domain {
            DomainError::DuplicateUsername => (StatusCode::BAD_REQUEST, "Username already exists"),
            DomainError::InvalidUsername => (StatusCode::BAD_REQUEST, "Invalid username"),
            DomainError::AccountNotFound => (StatusCode::NOT_FOUND, "User not found"),
            DomainError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid password"),
            DomainError::EncodingError(_)
            | DomainError::InvalidHashFormat(_)
            | DomainError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            // details stay in the log, the client only sees the generic message
            error!(error = %self, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}
