//! Task manager orchestrator.
//!
//! # Responsibility
//! - Compose the user store, session registry, and task store behind the
//!   API the presentation shell calls.
//! - Resolve every task-facing call to an acting username before touching
//!   the task store.
//!
//! # Invariants
//! - Each instance owns its stores exclusively; multiple isolated managers
//!   can coexist (nothing process-global).
//! - Cross-domain locks are taken sequentially, never nested; a session
//!   destroyed between resolution and the task mutation is accepted
//!   behavior.
//! - Every operation is total: failures are contract return values
//!   (`LOGIN_FAILED`, `NO_SESSION`, `false`, `None`, empty `Vec`).

use log::debug;
use std::io;
use std::path::PathBuf;

use crate::model::task::{Task, TaskChange, TaskDraft};
use crate::repo::session_registry::SessionRegistry;
use crate::repo::task_store::TaskStore;
use crate::repo::user_store::UserStore;

/// Sentinel returned by [`TaskManager::login`] for bad credentials.
///
/// Can never collide with a real session id; those start at 1.
pub const LOGIN_FAILED: i64 = -1;

/// Sentinel returned by [`TaskManager::add_task`] for an invalid session.
pub const NO_SESSION: i64 = -1;

/// File locations for one manager instance.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    pub users_file: PathBuf,
    pub tasks_file: PathBuf,
}

impl Default for ManagerConfig {
    /// The legacy deployment's file names, relative to the working
    /// directory.
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("users.txt"),
            tasks_file: PathBuf::from("tasks.txt"),
        }
    }
}

/// One self-contained to-do core instance.
pub struct TaskManager {
    users: UserStore,
    sessions: SessionRegistry,
    tasks: TaskStore,
}

impl TaskManager {
    /// Loads both backing files and returns a ready manager.
    ///
    /// Missing files are a first run (default admin user, empty task set);
    /// sessions always start empty.
    ///
    /// # Errors
    /// - Propagates I/O failures other than absent files.
    pub fn open(config: ManagerConfig) -> io::Result<Self> {
        Ok(Self {
            users: UserStore::open(config.users_file)?,
            sessions: SessionRegistry::new(),
            tasks: TaskStore::open(config.tasks_file)?,
        })
    }

    /// Final flush of both files. Both are attempted; the first error wins.
    ///
    /// This is the explicit end of the lifecycle; nothing relies on drop
    /// to persist data.
    ///
    /// # Errors
    /// - Propagates the underlying write failure.
    pub fn close(self) -> io::Result<()> {
        let users = self.users.flush();
        let tasks = self.tasks.flush();
        users.and(tasks)
    }

    /// Registers a new user; `false` on a duplicate username. No session
    /// required.
    pub fn register(&self, username: &str, password: &str) -> bool {
        self.users.register(username, password)
    }

    /// Authenticates and opens a session.
    ///
    /// Returns the new session id, or [`LOGIN_FAILED`] when the
    /// username/password pair matches no stored user.
    pub fn login(&self, username: &str, password: &str) -> i64 {
        if !self.users.verify(username, password) {
            debug!(
                "event=login module=task_manager status=rejected username={}",
                username
            );
            return LOGIN_FAILED;
        }
        let session_id = self.sessions.create(username);
        debug!(
            "event=login module=task_manager status=ok username={} session_id={}",
            username, session_id
        );
        session_id
    }

    /// Ends a session; `true` iff it was live.
    pub fn logout(&self, session_id: i64) -> bool {
        let removed = self.sessions.destroy(session_id);
        debug!(
            "event=logout module=task_manager status={} session_id={}",
            if removed { "ok" } else { "unknown" },
            session_id
        );
        removed
    }

    /// Creates a task on behalf of the session's user.
    ///
    /// Returns the new task id, or [`NO_SESSION`] for an unresolved
    /// session.
    pub fn add_task(&self, draft: TaskDraft, session_id: i64) -> i64 {
        if self.sessions.resolve(session_id).is_none() {
            return NO_SESSION;
        }
        self.tasks.create(draft)
    }

    /// Full-record update; `false` for an invalid session, a missing task,
    /// or a task the session's user may not touch.
    pub fn update_task(&self, id: i64, change: TaskChange, session_id: i64) -> bool {
        match self.sessions.resolve(session_id) {
            Some(acting) => self.tasks.update(id, change, &acting),
            None => false,
        }
    }

    /// Deletes a task, with the same failure collapse as
    /// [`TaskManager::update_task`].
    pub fn delete_task(&self, id: i64, session_id: i64) -> bool {
        match self.sessions.resolve(session_id) {
            Some(acting) => self.tasks.delete(id, &acting),
            None => false,
        }
    }

    /// Returns a task iff the session is live and its user may read it.
    pub fn get_task(&self, id: i64, session_id: i64) -> Option<Task> {
        let acting = self.sessions.resolve(session_id)?;
        self.tasks.get(id, &acting)
    }

    /// The session user's unshared tasks, in insertion order. Empty for an
    /// invalid session.
    pub fn list_personal(&self, session_id: i64) -> Vec<Task> {
        match self.sessions.resolve(session_id) {
            Some(acting) => self.tasks.personal(&acting),
            None => Vec::new(),
        }
    }

    /// All shared tasks, in insertion order. Empty for an invalid session;
    /// any live session sees the same list.
    pub fn list_shared(&self, session_id: i64) -> Vec<Task> {
        if self.sessions.resolve(session_id).is_none() {
            return Vec::new();
        }
        self.tasks.shared()
    }
}
