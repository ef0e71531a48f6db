//! HTTP application wiring.
//!
//! Builds the Axum router, attaches middleware, and defines the shared state
//! injected into handlers. Kept out of `main` so tests can drive the router
//! directly.

use crate::api;
use crate::auth;
use crate::auth::SessionStore;
use crate::config::{AppConfig, Branding};
use crate::middleware::trace_layer;
use crate::services::Dispatcher;
use anyhow::Context;
use axum::routing::get;
use axum::Router;
use pages::PageRegistry;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub dispatcher: Dispatcher,
    pub branding: Arc<Branding>,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(
        sessions: SessionStore,
        registry: PageRegistry,
        branding: Branding,
        assets_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sessions: Arc::new(sessions),
            dispatcher: Dispatcher::new(Arc::new(registry)),
            branding: Arc::new(branding),
            assets_dir: assets_dir.into(),
        }
    }
}

/// Builds the state from configuration, validating every page target.
///
/// A page whose target cannot be resolved makes the deployment unusable, so
/// this fails instead of starting with a partial page set.
pub fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let registry = PageRegistry::with_defaults(&config.pages_dir, auth::role_option_labels());
    registry
        .validate()
        .with_context(|| format!("validate page targets in {}", config.pages_dir.display()))?;

    for asset in [&config.branding.logo, &config.branding.icon_image] {
        let path = config.assets_dir.join(asset);
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "branding asset missing");
        }
    }

    Ok(AppState::new(
        SessionStore::with_limits(config.session_idle_ttl, config.max_sessions),
        registry,
        config.branding.clone(),
        &config.assets_dir,
    ))
}

pub fn build_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .nest("/api/auth", auth::auth_router())
        .merge(api::navigation::navigation_router())
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::session_layer,
        ));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(api::system::health))
        .route("/api/app", get(api::system::app_info))
        .merge(session_routes)
        .nest_service("/assets", ServeDir::new(&state.assets_dir))
        .layer(trace_layer())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Welcome to City Data Intelligence!"
}
