//! The three mutual-exclusion domains of the core.
//!
//! # Responsibility
//! - Own the in-memory collections for users, sessions, and tasks.
//! - Hold each domain's lock across the whole read or write, including the
//!   persistence rewrite that follows a mutation.
//!
//! # Invariants
//! - No store references another; the service layer mediates.
//! - No code path re-acquires its own domain lock.
//! - Store operations are total: failures surface as contract return
//!   values, never as panics.

pub mod session_registry;
pub mod task_store;
pub mod user_store;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Acquires a domain lock, recovering the data on poison.
///
/// A panic in another thread must not take the whole core down with it;
/// the collections stay usable because every mutation leaves them in a
/// consistent state before any fallible call.
pub(crate) fn hold<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
