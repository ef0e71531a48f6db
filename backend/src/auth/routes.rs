//! Defines the HTTP routes specifically for authentication.
//!
//! Mounted under `/api/auth` behind the session middleware.

use super::handlers::{login, logout, session_info};
use crate::app::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session_info))
}
