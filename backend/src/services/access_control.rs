//! Role to page-group access table.
//!
//! This is the product's access policy written out as a literal table. Order
//! matters: groups and pages appear in navigation exactly as listed here.

use crate::auth::Role;
use pages::{Page, PageGroup};

pub type GroupedPages = Vec<(PageGroup, Vec<Page>)>;

/// Pages available to every authenticated role, listed first in navigation.
pub const ACCOUNT_PAGES: [Page; 2] = [Page::Logout, Page::Settings];

pub fn resolve_groups(role: Option<Role>) -> GroupedPages {
    match role {
        Some(Role::Admin) => vec![
            (PageGroup::Visualization, vec![Page::Dashboard, Page::Maps]),
            (PageGroup::Eda, vec![Page::Eda]),
            (PageGroup::MachineLearning, vec![Page::MlAnalysis]),
        ],
        Some(Role::DecisionMaker) => vec![
            (PageGroup::Visualization, vec![Page::Dashboard, Page::Maps]),
            (PageGroup::MachineLearning, vec![Page::MlAnalysis]),
        ],
        Some(Role::Citizen) => vec![(PageGroup::Visualization, vec![Page::Maps])],
        None => Vec::new(),
    }
}

/// Whether `page` is reachable for `role`, account and login pages included.
pub fn is_entitled(role: Option<Role>, page: Page) -> bool {
    let groups = resolve_groups(role);
    if groups.is_empty() {
        return page == Page::Login;
    }
    ACCOUNT_PAGES.contains(&page) || groups.iter().any(|(_, pages)| pages.contains(&page))
}
