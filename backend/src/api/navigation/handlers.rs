//! Handler functions for the navigation API.
//!
//! Both handlers go through the dispatcher, so the returned frame always
//! carries freshly resolved navigation and exactly one rendered page.

use crate::app::AppState;
use crate::auth::CurrentSession;
use crate::errors::AppError;
use crate::services::Frame;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use pages::Page;

pub async fn current_navigation(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
) -> Result<Json<Frame>, AppError> {
    let mut session = current.handle.lock().await;
    let frame = state.dispatcher.dispatch(&mut session, None).await?;
    Ok(Json(frame))
}

pub async fn open_page(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
    Path(key): Path<String>,
) -> Result<Json<Frame>, AppError> {
    let page = Page::from_key(&key).ok_or(AppError::PageNotFound(key))?;
    let mut session = current.handle.lock().await;
    let frame = state.dispatcher.dispatch(&mut session, Some(page)).await?;
    Ok(Json(frame))
}
