mod common;

use axum::http::StatusCode;
use common::{nav_summary, section, Client, TestApp};
use serde_json::json;

#[tokio::test]
async fn citizen_login_from_fresh_session() {
    let app = TestApp::new();
    let mut client = Client::new(&app);

    let (status, frame) = client.get("/api/navigation").await;
    assert_eq!(status, StatusCode::OK);
    assert!(client.cookie().is_some(), "fresh session should get a cookie");
    assert_eq!(nav_summary(&frame), vec![section("_", &["login"])]);
    assert_eq!(frame["active"]["key"], "login");
    assert_eq!(frame["active"]["body"]["kind"], "prompt");
    assert!(frame["role"].is_null());

    let (status, frame) = client
        .post_json("/api/auth/login", json!({ "role": "Citizen" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["role"], "Citizen");
    assert_eq!(
        nav_summary(&frame),
        vec![
            section("Account", &["logout", "settings"]),
            section("Visualization", &["maps"]),
        ]
    );
    assert_eq!(frame["active"]["key"], "logout");
}

#[tokio::test]
async fn admin_sees_all_groups_in_order() {
    let app = TestApp::new();
    let mut client = Client::new(&app);

    let (status, frame) = client
        .post_json("/api/auth/login", json!({ "role": "Admin" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        nav_summary(&frame),
        vec![
            section("Account", &["logout", "settings"]),
            section("Visualization", &["dashboard", "maps"]),
            section("EDA", &["eda"]),
            section("Machine Learning", &["ml"]),
        ]
    );
}

#[tokio::test]
async fn decision_maker_has_no_eda() {
    let app = TestApp::new();
    let mut client = Client::new(&app);

    let (_, frame) = client
        .post_json("/api/auth/login", json!({ "role": "Decision Maker" }))
        .await;
    assert_eq!(
        nav_summary(&frame),
        vec![
            section("Account", &["logout", "settings"]),
            section("Visualization", &["dashboard", "maps"]),
            section("Machine Learning", &["ml"]),
        ]
    );

    let (status, body) = client.get("/api/pages/eda").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "page_not_reachable");
}

#[tokio::test]
async fn logout_returns_to_login_only() {
    let app = TestApp::new();
    let mut client = Client::new(&app);

    client
        .post_json("/api/auth/login", json!({ "role": "Admin" }))
        .await;
    let (status, frame) = client.get("/api/pages/ml").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nav_summary(&frame).len(), 4);
    assert_eq!(frame["active"]["key"], "ml");

    let (status, frame) = client.post("/api/auth/logout").await;
    assert_eq!(status, StatusCode::OK);
    assert!(frame["role"].is_null());
    assert_eq!(nav_summary(&frame), vec![section("_", &["login"])]);
    assert_eq!(frame["active"]["key"], "login");

    let (status, frame) = client.get("/api/navigation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["active"]["key"], "login");

    let (status, _) = client.get("/api/pages/ml").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn opening_a_page_renders_its_document_and_sticks() {
    let app = TestApp::new();
    let mut client = Client::new(&app);
    client
        .post_json("/api/auth/login", json!({ "role": "Citizen" }))
        .await;

    let (status, frame) = client.get("/api/pages/maps").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["active"]["title"], "🗺️ Interactive Maps");
    assert_eq!(frame["active"]["body"]["kind"], "document");
    assert_eq!(
        frame["active"]["body"]["content"],
        "<h1>🗺️ Interactive Maps</h1>"
    );

    let (_, frame) = client.get("/api/navigation").await;
    assert_eq!(frame["active"]["key"], "maps");

    let (status, _) = client.get("/api/pages/dashboard").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (_, frame) = client.get("/api/navigation").await;
    assert_eq!(frame["active"]["key"], "maps");
}

#[tokio::test]
async fn unknown_page_is_not_found() {
    let app = TestApp::new();
    let mut client = Client::new(&app);

    let (status, body) = client.get("/api/pages/finance").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "page_not_found");
}

#[tokio::test]
async fn anonymous_session_cannot_open_account_pages() {
    let app = TestApp::new();
    let mut client = Client::new(&app);

    for key in ["settings", "logout", "maps"] {
        let (status, _) = client.get(&format!("/api/pages/{key}")).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{key} should be unreachable");
    }
    let (status, frame) = client.get("/api/pages/login").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        frame["active"]["body"]["options"],
        json!([null, "Admin", "Decision Maker", "Citizen"])
    );
}

#[tokio::test]
async fn sessions_do_not_share_roles() {
    let app = TestApp::new();
    let mut admin = Client::new(&app);
    let mut visitor = Client::new(&app);

    admin
        .post_json("/api/auth/login", json!({ "role": "Admin" }))
        .await;
    let (_, frame) = visitor.get("/api/navigation").await;
    assert_ne!(admin.cookie(), visitor.cookie());
    assert_eq!(nav_summary(&frame), vec![section("_", &["login"])]);

    let (_, info) = admin.get("/api/auth/session").await;
    assert_eq!(info, json!({ "role": "Admin", "authenticated": true }));
    let (_, info) = visitor.get("/api/auth/session").await;
    assert_eq!(info, json!({ "role": null, "authenticated": false }));
}

#[tokio::test]
async fn stale_cookie_gets_a_new_session() {
    let app = TestApp::new();
    let mut client = Client::new(&app);
    client
        .post_json("/api/auth/login", json!({ "role": "Citizen" }))
        .await;
    let first = client.cookie().map(str::to_string);

    let mut stranger = Client::new(&app);
    stranger.get("/api/navigation").await;
    let forged = format!("citydash_session={}", "0".repeat(32));
    let request = axum::http::Request::builder()
        .uri("/api/auth/session")
        .header("cookie", forged)
        .body(axum::body::Body::empty())
        .expect("request");
    let response = app.send(request).await;
    assert!(response.headers().get("set-cookie").is_some());
    let info = common::read_json(response).await;
    assert_eq!(info["authenticated"], false);

    let (_, info) = client.get("/api/auth/session").await;
    assert_eq!(info["role"], "Citizen");
    assert_eq!(client.cookie().map(str::to_string), first);
}

#[tokio::test]
async fn cookieless_traffic_keeps_session_store_bounded() {
    let app = TestApp::with_config(|config| config.max_sessions = 8);

    for _ in 0..500 {
        let (status, _) = Client::new(&app).get("/api/pages/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    assert_eq!(app.state.sessions.len().await, 8);

    let mut client = Client::new(&app);
    let (status, frame) = client
        .post_json("/api/auth/login", json!({ "role": "Citizen" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["role"], "Citizen");
    let (_, info) = client.get("/api/auth/session").await;
    assert_eq!(info["role"], "Citizen");
}
