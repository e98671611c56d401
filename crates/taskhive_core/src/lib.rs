//! Core domain logic for TaskHive, a multi-user collaborative to-do list.
//! This crate is the single source of truth for business invariants:
//! username uniqueness, session validity, and per-task access control.
//!
//! Presentation shells (menu loops, prompting, rendering) live outside this
//! crate and call [`TaskManager`] with already-parsed arguments.

pub mod logging;
pub mod model;
pub mod persist;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::session::Session;
pub use model::task::{Priority, Task, TaskChange, TaskDraft};
pub use model::user::User;
pub use persist::{RecordError, RecordResult};
pub use repo::session_registry::SessionRegistry;
pub use repo::task_store::TaskStore;
pub use repo::user_store::UserStore;
pub use service::task_manager::{ManagerConfig, TaskManager, LOGIN_FAILED, NO_SESSION};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
