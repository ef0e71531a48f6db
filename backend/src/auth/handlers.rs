//! Handler functions for authentication-related API endpoints.
//!
//! Login and logout mutate the session's role and then hand the session to the
//! dispatcher, so the response always reflects the new state.

use super::middleware::CurrentSession;
use super::models::{LoginRequest, SessionInfo};
use crate::app::AppState;
use crate::errors::AppError;
use crate::services::Frame;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};

pub async fn login(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Frame>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "login body rejected");
        rejection
    })?;
    let mut session = current.handle.lock().await;
    let selection = request
        .selection()
        .and_then(|selection| session.login(selection))
        .map_err(|err| {
            tracing::warn!(error = %err, selection = ?request.role, "login rejected");
            err
        })?;
    tracing::info!(role = %selection, "session logged in");

    let frame = state.dispatcher.dispatch(&mut session, None).await?;
    Ok(Json(frame))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
) -> Result<Json<Frame>, AppError> {
    let mut session = current.handle.lock().await;
    if let Some(previous) = session.logout() {
        tracing::info!(role = %previous, "session logged out");
    }

    let frame = state.dispatcher.dispatch(&mut session, None).await?;
    Ok(Json(frame))
}

pub async fn session_info(Extension(current): Extension<CurrentSession>) -> Json<SessionInfo> {
    let role = current.handle.lock().await.role();
    Json(SessionInfo::for_role(role))
}
