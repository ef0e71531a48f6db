//! Module for core business logic services.
//!
//! This module encapsulates the access policy, the navigation resolver built
//! on top of it, and the dispatcher that turns a session's state into one
//! rendered frame.

pub mod access_control;
pub mod dispatcher;
pub mod navigation;

pub use access_control::{is_entitled, resolve_groups, ACCOUNT_PAGES};
pub use dispatcher::{Dispatcher, Frame};
pub use navigation::{build_navigation, NavSection, NavigationView};
