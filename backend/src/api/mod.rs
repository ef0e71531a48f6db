//! Central module for organizing the application's main API endpoints.
//!
//! This module groups the navigation endpoints (resolved page sets and page
//! dispatch) and the system endpoints (health, app header). Authentication
//! routes are handled separately in `auth`.

pub mod navigation;
pub mod system;
