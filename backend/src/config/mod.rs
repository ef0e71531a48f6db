//! Central module for application-wide configuration settings.
//!
//! Settings come from built-in defaults, then environment variables, then an
//! optional YAML file named by `CITYDASH_CONFIG`. Branding (titles, logo,
//! colour palette) is only configurable through the YAML file.

use crate::auth::service::{DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS};
use crate::logging::LogFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_PAGES_DIR: &str = "content";
pub const DEFAULT_ASSETS_DIR: &str = "images";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub pages_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Sessions unused for this long are dropped.
    pub session_idle_ttl: Duration,
    pub max_sessions: usize,
    pub branding: Branding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Centered,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarState {
    Auto,
    Expanded,
    Collapsed,
}

/// Colour palette handed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1E88E5".to_string(),
            secondary: "#1565C0".to_string(),
            accent: "#42A5F5".to_string(),
            background: "#F5F7FA".to_string(),
            text: "#1A1A1A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub page_title: String,
    pub page_icon: String,
    pub header_title: String,
    /// Logo file name under the assets directory.
    pub logo: String,
    /// Compact logo used when the sidebar is collapsed.
    pub icon_image: String,
    pub layout: Layout,
    pub sidebar: SidebarState,
    pub theme: Theme,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            page_title: "City Data Intelligence".to_string(),
            page_icon: "🏙️".to_string(),
            header_title: "🌆 City Data Intelligence Platform".to_string(),
            logo: "horizontal_blue.png".to_string(),
            icon_image: "icon_blue.png".to_string(),
            layout: Layout::Wide,
            sidebar: SidebarState::Expanded,
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AppConfigOverride {
    bind_addr: Option<String>,
    pages_dir: Option<PathBuf>,
    assets_dir: Option<PathBuf>,
    log_level: Option<String>,
    log_format: Option<String>,
    session_idle_ttl_secs: Option<u64>,
    max_sessions: Option<usize>,
    branding: Option<Branding>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("CITYDASH_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse CITYDASH_BIND")?;
        let pages_dir = std::env::var("CITYDASH_PAGES_DIR")
            .unwrap_or_else(|_| DEFAULT_PAGES_DIR.to_string())
            .into();
        let assets_dir = std::env::var("CITYDASH_ASSETS_DIR")
            .unwrap_or_else(|_| DEFAULT_ASSETS_DIR.to_string())
            .into();
        let log_level =
            std::env::var("CITYDASH_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let log_format = std::env::var("CITYDASH_LOG_FORMAT")
            .map(|value| LogFormat::parse_loose(&value))
            .unwrap_or(LogFormat::Compact);
        let session_idle_ttl = match std::env::var("CITYDASH_SESSION_TTL_SECS") {
            Ok(value) => Duration::from_secs(
                value
                    .parse()
                    .with_context(|| "parse CITYDASH_SESSION_TTL_SECS")?,
            ),
            Err(_) => DEFAULT_IDLE_TTL,
        };
        let max_sessions = match std::env::var("CITYDASH_MAX_SESSIONS") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse CITYDASH_MAX_SESSIONS")?,
            Err(_) => DEFAULT_MAX_SESSIONS,
        };
        Ok(Self {
            bind_addr,
            pages_dir,
            assets_dir,
            log_level,
            log_format,
            session_idle_ttl,
            max_sessions,
            branding: Branding::default(),
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("CITYDASH_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read CITYDASH_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: AppConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse citydash config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.pages_dir {
            self.pages_dir = value;
        }
        if let Some(value) = override_cfg.assets_dir {
            self.assets_dir = value;
        }
        if let Some(value) = override_cfg.log_level {
            self.log_level = value;
        }
        if let Some(value) = override_cfg.log_format {
            self.log_format = LogFormat::parse_loose(&value);
        }
        if let Some(value) = override_cfg.session_idle_ttl_secs {
            self.session_idle_ttl = Duration::from_secs(value);
        }
        if let Some(value) = override_cfg.max_sessions {
            self.max_sessions = value;
        }
        if let Some(value) = override_cfg.branding {
            self.branding = value;
        }
        Ok(())
    }
}
