//! Authentication module for role selection, sessions, and access state.
//!
//! This module provides the public interface for the per-session role store,
//! the login/logout state machine, the session cookie middleware, and the
//! auth HTTP routes.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::AuthError;
pub use middleware::{session_layer, CurrentSession, SESSION_COOKIE};
pub use models::{
    parse_role_selection, role_option_labels, role_options, LoginRequest, Role, SessionInfo,
};
pub use routes::auth_router;
pub use service::{spawn_sweeper, Session, SessionHandle, SessionId, SessionStore};
