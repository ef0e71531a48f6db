//! Defines the HTTP routes for navigation and page dispatch.
//!
//! These routes sit behind the session middleware; each request resolves
//! navigation for the caller's session and renders one page.

use super::handlers::{current_navigation, open_page};
use crate::app::AppState;
use axum::routing::get;
use axum::Router;

pub fn navigation_router() -> Router<AppState> {
    Router::new()
        .route("/api/navigation", get(current_navigation))
        .route("/api/pages/:key", get(open_page))
}
