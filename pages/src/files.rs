//! Document renderer for content pages stored on disk.
//!
//! Each document target maps to `<root>/<target>.html`. The shell treats the
//! file as opaque: it is read and returned verbatim as the page body.

use crate::errors::{PageError, PageResult};
use crate::models::{Page, PageBody, RenderContext, RenderTarget, RenderedPage};
use crate::PageRenderer;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

const DOCUMENT_EXTENSION: &str = "html";
const DOCUMENT_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    root: PathBuf,
}

impl DocumentRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File backing `page`, or `None` for pages that are not documents.
    pub fn path_for(&self, page: Page) -> Option<PathBuf> {
        match page.target() {
            RenderTarget::Document(target) => {
                let file = format!("{target}.{DOCUMENT_EXTENSION}");
                Some(self.root.join(file))
            }
            RenderTarget::Builtin => None,
        }
    }
}

#[async_trait]
impl PageRenderer for DocumentRenderer {
    fn check(&self, page: Page) -> PageResult<()> {
        let path = self.path_for(page).ok_or(PageError::Unsupported(page))?;
        if path.is_file() {
            Ok(())
        } else {
            Err(PageError::MissingTarget { page, path })
        }
    }

    async fn render(&self, page: Page, _ctx: &RenderContext) -> PageResult<RenderedPage> {
        let path = self.path_for(page).ok_or(PageError::Unsupported(page))?;
        log::debug!("rendering {} from {}", page, path.display());

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => PageError::MissingTarget {
                    page,
                    path: path.clone(),
                },
                _ => PageError::Io {
                    path: path.clone(),
                    source,
                },
            })?;

        Ok(RenderedPage::new(
            page,
            PageBody::Document {
                content_type: DOCUMENT_CONTENT_TYPE.to_string(),
                content,
            },
        ))
    }
}
