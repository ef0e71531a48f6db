//! City Data Intelligence backend.
//!
//! A role-gated dashboard shell: sessions log in as one of a fixed set of
//! roles, and each role sees its own subset of visualization, analysis and
//! machine-learning pages.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod errors;
pub mod logging;
pub mod middleware;
pub mod services;
