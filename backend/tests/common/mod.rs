#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use backend::app::{build_router, build_state, AppState};
use backend::config::{AppConfig, Branding};
use backend::logging::LogFormat;
use pages::{Page, RenderTarget};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

/// Writes one HTML document per document page, its body being the page title.
pub fn populate_pages(root: &Path) {
    for page in Page::ALL {
        if let RenderTarget::Document(target) = page.target() {
            let path = root.join(format!("{target}.html"));
            fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
            fs::write(path, format!("<h1>{}</h1>", page.title())).expect("write page");
        }
    }
}

pub fn test_config(pages_dir: &Path, assets_dir: &Path) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().expect("bind"),
        pages_dir: pages_dir.to_path_buf(),
        assets_dir: assets_dir.to_path_buf(),
        log_level: "info".to_string(),
        log_format: LogFormat::Compact,
        session_idle_ttl: Duration::from_secs(1800),
        max_sessions: 10_000,
        branding: Branding::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _pages: TempDir,
    _assets: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let pages = tempfile::tempdir().expect("pages dir");
        let assets = tempfile::tempdir().expect("assets dir");
        populate_pages(pages.path());
        fs::write(assets.path().join("icon_blue.png"), b"\x89PNG icon").expect("icon");
        fs::write(assets.path().join("horizontal_blue.png"), b"\x89PNG logo").expect("logo");

        let mut config = test_config(pages.path(), assets.path());
        adjust(&mut config);
        let state = build_state(&config).expect("state");
        Self {
            router: build_router(state.clone()),
            state,
            _pages: pages,
            _assets: assets,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("response")
    }
}

/// A browser-like client that remembers its session cookie.
pub struct Client<'a> {
    app: &'a TestApp,
    cookie: Option<String>,
}

impl<'a> Client<'a> {
    pub fn new(app: &'a TestApp) -> Self {
        Self { app, cookie: None }
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub async fn get(&mut self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = self.request("GET", uri).body(Body::empty()).expect("request");
        self.exchange(request).await
    }

    pub async fn post_json(
        &mut self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = self
            .request("POST", uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.exchange(request).await
    }

    pub async fn post(&mut self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = self.request("POST", uri).body(Body::empty()).expect("request");
        self.exchange(request).await
    }

    /// Posts `body` verbatim, with `content_type` if given.
    pub async fn post_raw(
        &mut self,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = self.request("POST", uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body)).expect("request");
        self.exchange(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn exchange(&mut self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.send(request).await;
        if let Some(value) = response.headers().get(SET_COOKIE) {
            let value = value.to_str().expect("cookie header");
            let pair = value.split(';').next().expect("cookie pair");
            self.cookie = Some(pair.to_string());
        }
        let status = response.status();
        (status, read_json(response).await)
    }
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&bytes).expect("json")
}

/// `[(group, [page keys])]` of a frame's navigation.
pub fn nav_summary(frame: &serde_json::Value) -> Vec<(String, Vec<String>)> {
    frame["navigation"]
        .as_array()
        .expect("navigation array")
        .iter()
        .map(|section| {
            let group = section["group"].as_str().expect("group").to_string();
            let pages = section["pages"]
                .as_array()
                .expect("pages")
                .iter()
                .map(|page| page["key"].as_str().expect("key").to_string())
                .collect();
            (group, pages)
        })
        .collect()
}

pub fn section(group: &str, pages: &[&str]) -> (String, Vec<String>) {
    (
        group.to_string(),
        pages.iter().map(|page| page.to_string()).collect(),
    )
}
