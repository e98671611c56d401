//! Login session record.
//!
//! Sessions live only in memory: a process restart invalidates every
//! session, so there is no serialized form.

use super::unix_now;

/// One active login, bound to an authenticated username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Monotonic id issued by the registry, never reused in-process.
    pub id: i64,
    pub username: String,
    /// Unix seconds at login.
    pub login_time: i64,
}

impl Session {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            login_time: unix_now(),
        }
    }
}
