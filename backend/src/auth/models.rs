//! Data structures for authentication-related entities.
//!
//! This module defines the closed role enumeration, the login selector's value
//! list, and the request/response shapes of the auth endpoints.

use super::errors::AuthError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Access tier a session is logged in as. "No role" is `Option<Role>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Decision Maker")]
    DecisionMaker,
    #[serde(rename = "Citizen")]
    Citizen,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::DecisionMaker, Role::Citizen];

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::DecisionMaker => "Decision Maker",
            Role::Citizen => "Citizen",
        }
    }

    /// Matches a display label, ignoring case, or its snake_case alias.
    pub fn from_label(raw: &str) -> Option<Role> {
        let raw = raw.trim();
        Role::ALL.into_iter().find(|role| {
            role.label().eq_ignore_ascii_case(raw)
                || role.label().replace(' ', "_").eq_ignore_ascii_case(raw)
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label shown for the placeholder entry of the login selector.
pub const PLACEHOLDER_LABEL: &str = "None";

/// The login selector's values in display order, placeholder first.
pub fn role_options() -> Vec<Option<Role>> {
    std::iter::once(None)
        .chain(Role::ALL.into_iter().map(Some))
        .collect()
}

/// Display labels of [`role_options`] as handed to the login prompt.
pub fn role_option_labels() -> Vec<Option<String>> {
    role_options()
        .into_iter()
        .map(|role| role.map(|role| role.label().to_string()))
        .collect()
}

/// Parses a value posted by the login selector.
///
/// `null`, the empty string and `"None"` are the placeholder and yield
/// `Ok(None)`; the caller decides whether the placeholder is acceptable.
pub fn parse_role_selection(raw: Option<&str>) -> Result<Option<Role>, AuthError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case(PLACEHOLDER_LABEL) {
        return Ok(None);
    }
    Role::from_label(raw)
        .map(Some)
        .ok_or_else(|| AuthError::InvalidRoleSelection(raw.to_string()))
}

/// Body of `POST /api/auth/login`.
///
/// `role` is kept as raw JSON so a non-string selection is reported as an
/// invalid role rather than a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub role: Option<Value>,
}

impl LoginRequest {
    pub fn selection(&self) -> Result<Option<Role>, AuthError> {
        match &self.role {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => parse_role_selection(Some(raw)),
            Some(other) => Err(AuthError::InvalidRoleSelection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub role: Option<Role>,
    pub authenticated: bool,
}

impl SessionInfo {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            role,
            authenticated: role.is_some(),
        }
    }
}
