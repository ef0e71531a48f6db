//! Page catalog and rendered-page models for the `pages` crate.
//!
//! These models define the closed set of pages the dashboard shell knows about,
//! the groups they are shown under, and the output a renderer produces. The
//! backend resolves navigation in terms of these types only; string keys exist
//! solely at the HTTP boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every page the shell can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Logout,
    Settings,
    Dashboard,
    Maps,
    Eda,
    #[serde(rename = "ml")]
    MlAnalysis,
}

/// Where a page's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Rendered by the shell itself (login and logout prompts).
    Builtin,
    /// A content document addressed by a path-like key under the pages directory.
    Document(&'static str),
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Login,
        Page::Logout,
        Page::Settings,
        Page::Dashboard,
        Page::Maps,
        Page::Eda,
        Page::MlAnalysis,
    ];

    /// Stable key used in URLs.
    pub fn key(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Logout => "logout",
            Page::Settings => "settings",
            Page::Dashboard => "dashboard",
            Page::Maps => "maps",
            Page::Eda => "eda",
            Page::MlAnalysis => "ml",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Log in",
            Page::Logout => "Log out",
            Page::Settings => "Settings",
            Page::Dashboard => "📊 Data Dashboard",
            Page::Maps => "🗺️ Interactive Maps",
            Page::Eda => "🔎 Exploratory Data Analysis",
            Page::MlAnalysis => "🤖 Machine Learning Models",
        }
    }

    /// Material icon shortcode shown next to the title.
    pub fn icon(self) -> &'static str {
        match self {
            Page::Login => ":material/login:",
            Page::Logout => ":material/logout:",
            Page::Settings => ":material/settings:",
            Page::Dashboard => ":material/dashboard:",
            Page::Maps => ":material/map:",
            Page::Eda => ":material/search:",
            Page::MlAnalysis => ":material/auto_awesome:",
        }
    }

    pub fn target(self) -> RenderTarget {
        match self {
            Page::Login | Page::Logout => RenderTarget::Builtin,
            Page::Settings => RenderTarget::Document("settings"),
            Page::Dashboard => RenderTarget::Document("visualization/dashboard"),
            Page::Maps => RenderTarget::Document("visualization/maps"),
            Page::Eda => RenderTarget::Document("eda/eda"),
            Page::MlAnalysis => RenderTarget::Document("ml/ml_analysis"),
        }
    }

    pub fn descriptor(self) -> PageDescriptor {
        PageDescriptor {
            key: self.key(),
            title: self.title(),
            icon: self.icon(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Named navigation group a page is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageGroup {
    Account,
    Visualization,
    Eda,
    MachineLearning,
}

impl PageGroup {
    pub fn title(self) -> &'static str {
        match self {
            PageGroup::Account => "Account",
            PageGroup::Visualization => "Visualization",
            PageGroup::Eda => "EDA",
            PageGroup::MachineLearning => "Machine Learning",
        }
    }
}

impl fmt::Display for PageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Identity of a page as shown in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Implicit context handed to every render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Display label of the session's role, `None` when logged out.
    pub role: Option<String>,
}

impl RenderContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_role(label: impl Into<String>) -> Self {
        Self {
            role: Some(label.into()),
        }
    }
}

/// A form posted back to the shell, e.g. the login role selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Selectable values; `None` is the empty placeholder entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Option<String>>,
    pub button: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    Prompt(Prompt),
    Document { content_type: String, content: String },
}

/// Output of a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    #[serde(flatten)]
    pub page: PageDescriptor,
    pub body: PageBody,
}

impl RenderedPage {
    pub fn new(page: Page, body: PageBody) -> Self {
        Self {
            page: page.descriptor(),
            body,
        }
    }
}
