//! Binds every catalog page to the renderer that produces it.

use crate::errors::{PageError, PageResult};
use crate::files::DocumentRenderer;
use crate::models::{Page, RenderContext, RenderTarget, RenderedPage};
use crate::prompts::PromptRenderer;
use crate::PageRenderer;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct PageRegistry {
    renderers: HashMap<Page, Arc<dyn PageRenderer>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry serving documents from `pages_dir` and the built-in prompts.
    pub fn with_defaults(pages_dir: impl Into<PathBuf>, role_options: Vec<Option<String>>) -> Self {
        let documents: Arc<dyn PageRenderer> = Arc::new(DocumentRenderer::new(pages_dir));
        let prompts: Arc<dyn PageRenderer> = Arc::new(PromptRenderer::new(role_options));

        let mut registry = Self::new();
        for page in Page::ALL {
            let renderer = match page.target() {
                RenderTarget::Builtin => prompts.clone(),
                RenderTarget::Document(_) => documents.clone(),
            };
            registry.register(page, renderer);
        }
        registry
    }

    pub fn register(&mut self, page: Page, renderer: Arc<dyn PageRenderer>) -> &mut Self {
        self.renderers.insert(page, renderer);
        self
    }

    /// Checks that every page in the catalog has a resolvable target.
    ///
    /// A failure here means the deployment is broken; callers treat it as fatal.
    pub fn validate(&self) -> PageResult<()> {
        for page in Page::ALL {
            let renderer = self.renderers.get(&page).ok_or(PageError::NoRenderer(page))?;
            renderer.check(page)?;
        }
        log::info!("validated {} page targets", Page::ALL.len());
        Ok(())
    }

    pub async fn render(&self, page: Page, ctx: &RenderContext) -> PageResult<RenderedPage> {
        let renderer = self.renderers.get(&page).ok_or(PageError::NoRenderer(page))?;
        renderer.render(page, ctx).await
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pages: Vec<_> = self.renderers.keys().map(|page| page.key()).collect();
        pages.sort_unstable();
        f.debug_struct("PageRegistry").field("pages", &pages).finish()
    }
}
