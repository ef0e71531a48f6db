//! Built-in renderer for the account prompts (log in, log out).
//!
//! These pages have no document behind them: they describe a form the client
//! posts back to the shell's auth endpoints.

use crate::errors::{PageError, PageResult};
use crate::models::{Page, PageBody, Prompt, RenderContext, RenderedPage};
use crate::PageRenderer;
use async_trait::async_trait;

pub const LOGIN_ACTION: &str = "/api/auth/login";
pub const LOGOUT_ACTION: &str = "/api/auth/logout";

#[derive(Debug, Clone)]
pub struct PromptRenderer {
    role_options: Vec<Option<String>>,
}

impl PromptRenderer {
    /// `role_options` is the login selector's value list, placeholder included.
    pub fn new(role_options: Vec<Option<String>>) -> Self {
        Self { role_options }
    }

    fn prompt(&self, page: Page) -> PageResult<Prompt> {
        match page {
            Page::Login => Ok(Prompt {
                header: "🔐 Log In".to_string(),
                label: Some("Select your role".to_string()),
                options: self.role_options.clone(),
                button: "Log in".to_string(),
                action: LOGIN_ACTION.to_string(),
            }),
            Page::Logout => Ok(Prompt {
                header: "🚪 Log Out".to_string(),
                label: None,
                options: Vec::new(),
                button: "Log out".to_string(),
                action: LOGOUT_ACTION.to_string(),
            }),
            other => Err(PageError::Unsupported(other)),
        }
    }
}

#[async_trait]
impl PageRenderer for PromptRenderer {
    fn check(&self, page: Page) -> PageResult<()> {
        self.prompt(page).map(|_| ())
    }

    async fn render(&self, page: Page, _ctx: &RenderContext) -> PageResult<RenderedPage> {
        let prompt = self.prompt(page)?;
        Ok(RenderedPage::new(page, PageBody::Prompt(prompt)))
    }
}
