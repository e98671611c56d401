//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by personal and shared projections.
//! - Carry the access rule used by every read/update/delete path.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes.
//! - `created_at` is set at creation and preserved across update and reload.
//! - Numeric priority values 1/2/3 are fixed by the file format.

use serde::{Deserialize, Serialize};

use super::unix_now;

/// Task urgency level.
///
/// The numeric values are part of the persisted record format and must not
/// be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Value stored in the tasks file.
    pub fn as_value(self) -> i64 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Inverse of [`Priority::as_value`]; `None` for anything outside 1..=3.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Human-readable label for presentation layers.
    ///
    /// Kept separate from the numeric file values on purpose: display text
    /// may evolve, the format may not.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One to-do item, personal or shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Monotonic id issued by the store, never reused in-process.
    pub id: i64,
    pub title: String,
    pub category: String,
    /// Username the task belongs to. Not required to name a registered
    /// user; access control compares it to the acting username as-is.
    pub assigned_to: String,
    pub completed: bool,
    pub priority: Priority,
    /// Shared tasks are visible and editable by any authenticated user.
    pub is_shared: bool,
    /// Unix seconds at creation, preserved across update and reload.
    pub created_at: i64,
}

/// Caller-supplied fields for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub category: String,
    pub assigned_to: String,
    pub priority: Priority,
    pub is_shared: bool,
}

/// Caller-supplied fields for a full-record update.
///
/// Everything mutable is overwritten at once; `id` and `created_at` are the
/// only fields an update can never touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChange {
    pub title: String,
    pub category: String,
    pub assigned_to: String,
    pub completed: bool,
    pub priority: Priority,
    pub is_shared: bool,
}

impl Task {
    /// Creates a task from a draft with store-assigned id.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - `created_at` is the current wall clock.
    pub fn new(id: i64, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            category: draft.category,
            assigned_to: draft.assigned_to,
            completed: false,
            priority: draft.priority,
            is_shared: draft.is_shared,
            created_at: unix_now(),
        }
    }

    /// Whether `username` may read, update, or delete this task.
    pub fn accessible_to(&self, username: &str) -> bool {
        self.assigned_to == username || self.is_shared
    }

    /// Overwrites every mutable field from `change`, keeping `id` and
    /// `created_at`.
    pub fn apply(&mut self, change: TaskChange) {
        self.title = change.title;
        self.category = change.category;
        self.assigned_to = change.assigned_to;
        self.completed = change.completed;
        self.priority = change.priority;
        self.is_shared = change.is_shared;
    }
}
