//! Global application error types and handlers.
//!
//! This module defines the error type shared by handlers and services and
//! maps each variant to a status code and a `{code, message}` JSON body.
//! Render failures are logged server-side and reported generically.

use crate::auth::AuthError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pages::{Page, PageError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("no page named `{0}`")]
    PageNotFound(String),

    #[error("page `{0}` is not available for this session")]
    PageNotReachable(Page),

    #[error("failed to render page: {0}")]
    Render(#[from] PageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(AuthError::AlreadyAuthenticated(_)) => StatusCode::CONFLICT,
            AppError::Auth(_) => StatusCode::BAD_REQUEST,
            AppError::Body(rejection) => rejection.status(),
            AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PageNotReachable(_) => StatusCode::FORBIDDEN,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Auth(err) => err.code(),
            AppError::Body(JsonRejection::MissingJsonContentType(_)) => "unsupported_media_type",
            AppError::Body(JsonRejection::JsonSyntaxError(_)) => "malformed_body",
            AppError::Body(_) => "invalid_body",
            AppError::PageNotFound(_) => "page_not_found",
            AppError::PageNotReachable(_) => "page_not_reachable",
            AppError::Render(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Render(err) => {
                tracing::error!(error = %err, "page render failed");
                "page could not be rendered".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorResponse {
            code: self.code().to_string(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}
