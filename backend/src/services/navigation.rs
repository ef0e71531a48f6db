//! Navigation resolver.
//!
//! Composes the access table with the Account group. A session without a role
//! gets a single ungrouped section holding the login page, which is the only
//! way back into an authenticated state.

use super::access_control::{resolve_groups, ACCOUNT_PAGES};
use crate::auth::Role;
use pages::{Page, PageDescriptor, PageGroup};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Group name written for the ungrouped section.
pub const UNGROUPED: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub group: Option<PageGroup>,
    pub pages: Vec<Page>,
}

impl NavSection {
    pub fn name(&self) -> &'static str {
        self.group.map_or(UNGROUPED, PageGroup::title)
    }
}

impl Serialize for NavSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let pages: Vec<PageDescriptor> = self.pages.iter().map(|page| page.descriptor()).collect();
        let mut state = serializer.serialize_struct("NavSection", 2)?;
        state.serialize_field("group", self.name())?;
        state.serialize_field("pages", &pages)?;
        state.end()
    }
}

/// Resolved navigation for one role, sections in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationView {
    sections: Vec<NavSection>,
}

impl NavigationView {
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn group_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(NavSection::name).collect()
    }

    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        self.sections.iter().flat_map(|section| section.pages.iter().copied())
    }

    pub fn contains(&self, page: Page) -> bool {
        self.pages().any(|candidate| candidate == page)
    }

    /// First page of the first section; what a fresh navigation opens on.
    pub fn default_page(&self) -> Page {
        self.pages().next().unwrap_or(Page::Login)
    }

    pub fn is_login_only(&self) -> bool {
        self.sections.len() == 1
            && self.sections[0].group.is_none()
            && self.sections[0].pages == [Page::Login]
    }
}

pub fn build_navigation(role: Option<Role>) -> NavigationView {
    let groups = resolve_groups(role);
    if groups.is_empty() {
        return NavigationView {
            sections: vec![NavSection {
                group: None,
                pages: vec![Page::Login],
            }],
        };
    }

    let account = NavSection {
        group: Some(PageGroup::Account),
        pages: ACCOUNT_PAGES.to_vec(),
    };
    let sections = std::iter::once(account)
        .chain(groups.into_iter().map(|(group, pages)| NavSection {
            group: Some(group),
            pages,
        }))
        .collect();
    NavigationView { sections }
}
