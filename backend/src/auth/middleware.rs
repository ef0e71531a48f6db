//! Middleware that attaches a session to every request.
//!
//! The session id travels in the `citydash_session` cookie. Requests without a
//! known, well-formed id get a fresh unauthenticated session, and the response
//! carries a `Set-Cookie` header for it. Handlers read the session through the
//! `CurrentSession` request extension.

use super::service::{SessionHandle, SessionId};
use crate::app::AppState;
use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

pub const SESSION_COOKIE: &str = "citydash_session";

/// Session attached to the current request.
#[derive(Clone)]
pub struct CurrentSession {
    pub id: SessionId,
    pub handle: SessionHandle,
}

/// Extracts the session id from the `Cookie` headers, if any.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value.trim()))
}

pub fn session_cookie(id: &SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

pub async fn session_layer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = match session_id_from_headers(request.headers()) {
        Some(id) => state.sessions.get(&id).await.map(|handle| (id, handle)),
        None => None,
    };

    let (current, created) = match existing {
        Some((id, handle)) => (CurrentSession { id, handle }, false),
        None => {
            let (id, handle) = state.sessions.create().await;
            (CurrentSession { id, handle }, true)
        }
    };

    let cookie = created.then(|| session_cookie(&current.id));
    request.extensions_mut().insert(current);

    let mut response = next.run(request).await;
    if let Some(cookie) = cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(err) => tracing::error!(error = %err, "invalid session cookie"),
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_session_cookie_among_others() {
        let id = SessionId::generate();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}; lang=en")).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn ignores_malformed_or_missing_cookie() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_id_from_headers(&headers), None);

        headers.insert(
            COOKIE,
            HeaderValue::from_static("citydash_session=../../etc/passwd"),
        );
        assert_eq!(session_id_from_headers(&headers), None);
    }

    #[test]
    fn cookie_is_http_only() {
        let id = SessionId::generate();
        let cookie = session_cookie(&id);
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}={id}")));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
    }
}
