//! Core business logic for the authentication system.
//!
//! This service owns the per-session role state and the login/logout state
//! machine. Every session is an explicit context object; nothing here is
//! process-global, and two sessions never observe each other's role.

use super::errors::AuthError;
use super::models::Role;
use pages::Page;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;

const SESSION_ID_BYTES: usize = 16;

/// Sessions idle for longer than this are dropped.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Opaque session identifier: 16 random bytes, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let bytes: [u8; SESSION_ID_BYTES] = rand::random();
        Self(hex::encode(bytes))
    }

    /// Accepts only well-formed ids; anything else is treated as no session.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == SESSION_ID_BYTES * 2
            && raw.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of one user session.
#[derive(Debug, Default)]
pub struct Session {
    role: Option<Role>,
    active: Option<Page>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Sole mutator of the role. Forgets the active page so the next dispatch
    /// re-resolves navigation from scratch.
    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
        self.active = None;
    }

    pub fn active_page(&self) -> Option<Page> {
        self.active
    }

    pub fn set_active_page(&mut self, page: Page) {
        self.active = Some(page);
    }

    /// Unauthenticated -> Authenticated(role). Rejections leave the session untouched.
    pub fn login(&mut self, selection: Option<Role>) -> Result<Role, AuthError> {
        if let Some(current) = self.role {
            return Err(AuthError::AlreadyAuthenticated(current));
        }
        let role = selection.ok_or(AuthError::PlaceholderRole)?;
        self.set_role(Some(role));
        Ok(role)
    }

    /// Authenticated(any) -> Unauthenticated. Returns the role that was dropped.
    pub fn logout(&mut self) -> Option<Role> {
        let previous = self.role;
        self.set_role(None);
        previous
    }
}

pub type SessionHandle = Arc<Mutex<Session>>;

#[derive(Debug)]
struct Slot {
    handle: SessionHandle,
    last_seen: Instant,
}

impl Slot {
    fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) > ttl
    }
}

/// All live sessions, keyed by id.
///
/// Entries expire after `idle_ttl` without a lookup, and the store never holds
/// more than `max_sessions`: creating one past the cap evicts the least
/// recently seen session.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Slot>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    pub async fn create(&self) -> (SessionId, SessionHandle) {
        let handle: SessionHandle = Arc::new(Mutex::new(Session::new()));
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        sessions.retain(|_, slot| !slot.is_idle(now, self.idle_ttl));
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, slot)| slot.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    tracing::debug!(session = %id, "evicted least recently seen session");
                }
                None => break,
            }
        }

        let mut id = SessionId::generate();
        while sessions.contains_key(&id) {
            id = SessionId::generate();
        }
        sessions.insert(
            id.clone(),
            Slot {
                handle: handle.clone(),
                last_seen: now,
            },
        );
        tracing::debug!(sessions = sessions.len(), "session created");
        (id, handle)
    }

    /// Looks up a live session and marks it as seen. Expired entries are
    /// removed and reported as unknown.
    pub async fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let slot = sessions.get_mut(id)?;
        if slot.is_idle(now, self.idle_ttl) {
            sessions.remove(id);
            tracing::debug!(session = %id, "session expired");
            return None;
        }
        slot.last_seen = now;
        Some(slot.handle.clone())
    }

    pub async fn remove(&self, id: &SessionId) -> Option<SessionHandle> {
        self.sessions.write().await.remove(id).map(|slot| slot.handle)
    }

    /// Drops every session idle for longer than the TTL. Returns how many went.
    pub async fn sweep_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, slot| !slot.is_idle(now, self.idle_ttl));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Runs `sweep_idle` on `store` every `every` until the task is aborted.
pub fn spawn_sweeper(store: Arc<SessionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let swept = store.sweep_idle().await;
            if swept > 0 {
                tracing::debug!(swept, "idle sessions swept");
            }
        }
    })
}
