//! Core `pages` crate for the dashboard shell's render targets.
//!
//! This crate defines the `PageRenderer` trait, which is the seam between the
//! navigation shell and whatever produces page content, and provides the
//! concrete renderers (content documents on disk, built-in account prompts)
//! plus the registry that binds every catalog page to one of them.

pub mod errors;
pub mod files;
pub mod models;
pub mod prompts;
pub mod registry;

use async_trait::async_trait;

pub use errors::{PageError, PageResult};
pub use files::DocumentRenderer;
pub use models::{
    Page, PageBody, PageDescriptor, PageGroup, Prompt, RenderContext, RenderTarget, RenderedPage,
};
pub use prompts::PromptRenderer;
pub use registry::PageRegistry;

/// Produces the content of a page.
///
/// Implementations must be cheap to share across sessions; the registry keeps
/// them behind an `Arc`.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Verifies the page's target can be resolved. Called once at startup.
    fn check(&self, page: Page) -> PageResult<()>;

    async fn render(&self, page: Page, ctx: &RenderContext) -> PageResult<RenderedPage>;
}
