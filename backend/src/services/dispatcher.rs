//! Navigation control loop.
//!
//! Every interaction ends here: navigation is recomputed from the session's
//! current role and exactly one page is rendered. Nothing is cached between
//! calls, so a role change is visible on the very next dispatch.

use super::access_control::is_entitled;
use super::navigation::{build_navigation, NavigationView};
use crate::auth::{Role, Session};
use crate::errors::AppError;
use pages::{Page, PageRegistry, RenderContext, RenderedPage};
use serde::Serialize;
use std::sync::Arc;

/// Result of one interaction.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub role: Option<Role>,
    pub navigation: NavigationView,
    pub active: RenderedPage,
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<PageRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        Self { registry }
    }

    /// Resolves navigation for `session` and renders its active page.
    ///
    /// With no `requested` page the session keeps its current page if still
    /// reachable, otherwise it lands on the navigation's default page. If the
    /// remembered page no longer renders, the default page is shown instead.
    /// A requested page outside the navigation is rejected and the session is
    /// left as it was.
    pub async fn dispatch(
        &self,
        session: &mut Session,
        requested: Option<Page>,
    ) -> Result<Frame, AppError> {
        let role = session.role();
        let navigation = build_navigation(role);

        let mut active = match requested {
            Some(page) if is_entitled(role, page) => page,
            Some(page) => {
                tracing::warn!(page = %page, role = ?role, "page not reachable");
                return Err(AppError::PageNotReachable(page));
            }
            None => session
                .active_page()
                .filter(|page| navigation.contains(*page))
                .unwrap_or_else(|| navigation.default_page()),
        };

        let ctx = match role {
            Some(role) => RenderContext::for_role(role.label()),
            None => RenderContext::anonymous(),
        };
        let fallback = navigation.default_page();
        let rendered = match self.registry.render(active, &ctx).await {
            Ok(rendered) => rendered,
            Err(err) if requested.is_none() && active != fallback => {
                tracing::warn!(page = %active, error = %err, "remembered page failed to render");
                active = fallback;
                self.registry.render(active, &ctx).await?
            }
            Err(err) => return Err(err.into()),
        };
        session.set_active_page(active);
        tracing::debug!(page = %active, role = ?role, "page dispatched");

        Ok(Frame {
            role,
            navigation,
            active: rendered,
        })
    }
}
