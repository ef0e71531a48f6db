//! Custom error types specific to authentication failures.
//!
//! Login is a closed role selection, so every failure here is a rejected
//! selection or an illegal transition; none of them change session state.

use super::models::Role;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("`{0}` is not a selectable role")]
    InvalidRoleSelection(String),

    #[error("select a role before logging in")]
    PlaceholderRole,

    #[error("session is already logged in as {0}")]
    AlreadyAuthenticated(Role),
}

impl AuthError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidRoleSelection(_) => "invalid_role_selection",
            AuthError::PlaceholderRole => "placeholder_role",
            AuthError::AlreadyAuthenticated(_) => "already_authenticated",
        }
    }
}
