//! Domain model for the collaborative to-do core.
//!
//! # Responsibility
//! - Define the canonical records owned by the stores: users, sessions, tasks.
//! - Keep the task access rule in one place (`Task::accessible_to`).
//!
//! # Invariants
//! - Task and session ids are positive and never reused in-process.
//! - All timestamps are unix seconds.

pub mod session;
pub mod task;
pub mod user;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as unix seconds.
///
/// A clock before the epoch degrades to 0 instead of failing; model
/// constructors must stay total.
pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}
