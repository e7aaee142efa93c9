//! Server-side sessions
//!
//! Sessions live in memory, keyed by a random UUID token carried in the
//! `session` cookie. Expiry slides: every successful lookup pushes it out
//! by the configured TTL.

use dashmap::DashMap;
use http::HeaderMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

/// The logged-in employee, as seen by handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(rename = "employeeID")]
    pub employee_id: i64,
    pub email: String,
    pub is_manager: bool,
}

impl CurrentUser {
    /// Managers may act on anyone; everyone may act on themselves
    pub fn can_act_for(&self, employee_id: i64) -> bool {
        self.is_manager || self.employee_id == employee_id
    }
}

#[derive(Debug, Clone)]
struct Session {
    user: CurrentUser,
    expires_at: Instant,
}

/// Concurrent session table
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Open a session and return its token
    pub fn create(&self, user: CurrentUser) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                user,
                expires_at: Instant::now() + self.ttl,
            },
        );
        token
    }

    /// Look up a live session and extend it; expired sessions are dropped
    pub fn touch(&self, token: &str) -> Option<CurrentUser> {
        let now = Instant::now();
        let mut entry = self.sessions.get_mut(token)?;
        if entry.expires_at <= now {
            drop(entry);
            self.sessions.remove(token);
            return None;
        }
        entry.expires_at = now + self.ttl;
        Some(entry.user.clone())
    }

    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Drop every expired session, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.expires_at > now);
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Read the session token from the `Cookie` header(s)
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|v| !v.is_empty())
}

/// `Set-Cookie` value for a live session
pub fn session_cookie(token: &str, ttl: Duration, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        ttl.as_secs()
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that clears the session cookie
pub fn expired_cookie(secure: bool) -> String {
    session_cookie("", Duration::ZERO, secure)
}
