//! Session registry: in-memory login sessions.
//!
//! # Responsibility
//! - Map opaque session ids to authenticated usernames.
//!
//! # Invariants
//! - Ids start at 1 and increase monotonically; an id is never reused in
//!   this process, even after logout.
//! - Sessions are never persisted; a restart invalidates all of them.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::session::Session;

use super::hold;

struct RegistryState {
    sessions: HashMap<i64, Session>,
    next_id: i64,
}

/// Lock domain for active sessions.
pub struct SessionRegistry {
    state: Mutex<RegistryState>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState {
                sessions: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Records a new session for `username` and returns its id.
    pub fn create(&self, username: &str) -> i64 {
        let mut state = hold(&self.state);
        let id = state.next_id;
        state.next_id += 1;
        state.sessions.insert(id, Session::new(id, username));
        id
    }

    /// Removes a session; `true` iff one was present.
    pub fn destroy(&self, id: i64) -> bool {
        hold(&self.state).sessions.remove(&id).is_some()
    }

    /// Username of a live session, or `None` for unknown/destroyed ids.
    ///
    /// Callers treat `None` as an authorization failure distinct from
    /// "task not found".
    pub fn resolve(&self, id: i64) -> Option<String> {
        hold(&self.state)
            .sessions
            .get(&id)
            .map(|session| session.username.clone())
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
