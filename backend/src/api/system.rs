//! System API handlers: health check and app header.
//!
//! Both are served without a session; they read only in-memory configuration.

use crate::app::AppState;
use crate::auth::role_option_labels;
use crate::config::{Layout, SidebarState, Theme};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Everything the client needs to draw the page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub page_title: String,
    pub page_icon: String,
    pub header_title: String,
    pub logo: String,
    pub icon_image: String,
    pub layout: Layout,
    pub sidebar: SidebarState,
    pub theme: Theme,
    /// Login selector values, placeholder first.
    pub roles: Vec<Option<String>>,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

pub async fn app_info(State(state): State<AppState>) -> Json<AppInfo> {
    let branding = &state.branding;
    Json(AppInfo {
        page_title: branding.page_title.clone(),
        page_icon: branding.page_icon.clone(),
        header_title: branding.header_title.clone(),
        logo: asset_url(&branding.logo),
        icon_image: asset_url(&branding.icon_image),
        layout: branding.layout,
        sidebar: branding.sidebar,
        theme: branding.theme.clone(),
        roles: role_option_labels(),
    })
}

fn asset_url(name: &str) -> String {
    format!("/assets/{}", name.trim_start_matches('/'))
}
