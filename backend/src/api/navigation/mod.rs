//! Module for the navigation API.
//!
//! This module exposes the session's resolved navigation and lets the client
//! open any page that navigation contains.

pub mod handlers;
pub mod routes;

pub use routes::navigation_router;
