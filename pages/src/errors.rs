//! Custom error types specific to the `pages` crate.
//!
//! This module defines errors that can occur while resolving or rendering a
//! page target, so the backend can tell a broken deployment (a missing target
//! at startup) apart from a transient read failure.

use crate::models::Page;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("render target for page `{page}` not found at {}", path.display())]
    MissingTarget { page: Page, path: PathBuf },

    #[error("no renderer registered for page `{0}`")]
    NoRenderer(Page),

    #[error("renderer cannot render page `{0}`")]
    Unsupported(Page),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PageResult<T> = Result<T, PageError>;
