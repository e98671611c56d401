//! User store: registration and credential verification.
//!
//! # Responsibility
//! - Own the registered-user list behind one lock.
//! - Rewrite the users file after every successful registration.
//!
//! # Invariants
//! - Usernames are unique (linear scan, exact match) and never deleted.
//! - A failed save keeps the in-memory list authoritative; the triggering
//!   operation still reports its in-memory outcome.

use log::{error, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use crate::model::user::User;
use crate::persist::{decode_user, encode_user, read_lines, write_lines};

use super::hold;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin";

/// Lock domain for registered users.
pub struct UserStore {
    path: PathBuf,
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Loads the store from its backing file.
    ///
    /// A missing or empty file seeds the default `admin`/`admin` account in
    /// memory only; it reaches disk on the next save. Malformed lines are
    /// skipped with a warning and do not abort the load.
    ///
    /// # Errors
    /// - Propagates I/O failures other than the file being absent.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let started_at = Instant::now();

        let mut users = Vec::new();
        if let Some(lines) = read_lines(&path)? {
            for (index, line) in lines.iter().enumerate() {
                match decode_user(line) {
                    Ok(user) => users.push(user),
                    Err(err) => warn!(
                        "event=record_skipped module=user_store file={} line={} error={}",
                        path.display(),
                        index + 1,
                        err
                    ),
                }
            }
        }
        if users.is_empty() {
            users.push(User::new(DEFAULT_USERNAME, DEFAULT_PASSWORD));
        }

        info!(
            "event=store_open module=user_store status=ok duration_ms={} users={}",
            started_at.elapsed().as_millis(),
            users.len()
        );
        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    /// Registers a new user.
    ///
    /// Returns `false` without side effects when the username is already
    /// taken; otherwise appends the user, rewrites the file, and returns
    /// `true`.
    pub fn register(&self, username: &str, password: &str) -> bool {
        let mut users = hold(&self.users);
        if users.iter().any(|user| user.username == username) {
            return false;
        }
        users.push(User::new(username, password));
        save_best_effort(&self.path, &users);
        true
    }

    /// Exact-match credential check against the stored list.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let users = hold(&self.users);
        users
            .iter()
            .any(|user| user.username == username && user.verify(password))
    }

    /// Rewrites the users file from current memory state.
    ///
    /// # Errors
    /// - Propagates the I/O failure; memory state is unaffected.
    pub fn flush(&self) -> io::Result<()> {
        let users = hold(&self.users);
        write_lines(&self.path, &encode(&users))
    }
}

fn save_best_effort(path: &Path, users: &[User]) {
    if let Err(err) = write_lines(path, &encode(users)) {
        error!(
            "event=store_save module=user_store status=error file={} error={}",
            path.display(),
            err
        );
    }
}

fn encode(users: &[User]) -> Vec<String> {
    users.iter().map(encode_user).collect()
}
