//! Registered user record.
//!
//! # Invariants
//! - `username` is unique across the store and compared exactly
//!   (case-sensitive).
//! - `password` is stored in plaintext for file-format compatibility with
//!   the legacy deployment; this is a compatibility constraint, not a
//!   recommendation.

/// One registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact-match credential check.
    pub fn verify(&self, password: &str) -> bool {
        self.password == password
    }
}
