//! Task store: CRUD over the task list with per-task access control.
//!
//! # Responsibility
//! - Own the task list and the next-id counter behind one lock.
//! - Enforce the access rule on every read/update/delete.
//! - Rewrite the tasks file after every successful mutation, inside the
//!   same lock hold, so a save never observes a half-applied change.
//!
//! # Invariants
//! - Ids start at 1, increase monotonically, and are never reused
//!   in-process; after a load the counter resumes at max(loaded)+1.
//! - "Not found" and "no permission" collapse into one failure value by
//!   contract: callers cannot learn whether an inaccessible id exists.
//! - A failed save keeps memory authoritative; the mutation still reports
//!   success.

use log::{error, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use crate::model::task::{Task, TaskChange, TaskDraft};
use crate::persist::{decode_task, encode_task, read_lines, write_lines};

use super::hold;

struct StoreState {
    tasks: Vec<Task>,
    next_id: i64,
}

/// Lock domain for tasks.
pub struct TaskStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl TaskStore {
    /// Loads the store from its backing file.
    ///
    /// A missing file starts an empty store. Malformed lines are skipped
    /// with a warning; well-formed neighbors still load.
    ///
    /// # Errors
    /// - Propagates I/O failures other than the file being absent.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let started_at = Instant::now();

        let mut tasks: Vec<Task> = Vec::new();
        if let Some(lines) = read_lines(&path)? {
            for (index, line) in lines.iter().enumerate() {
                match decode_task(line) {
                    Ok(task) => tasks.push(task),
                    Err(err) => warn!(
                        "event=record_skipped module=task_store file={} line={} error={}",
                        path.display(),
                        index + 1,
                        err
                    ),
                }
            }
        }
        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;

        info!(
            "event=store_open module=task_store status=ok duration_ms={} tasks={} next_id={}",
            started_at.elapsed().as_millis(),
            tasks.len(),
            next_id
        );
        Ok(Self {
            path,
            state: Mutex::new(StoreState { tasks, next_id }),
        })
    }

    /// Creates a task from the draft and returns its id.
    ///
    /// Creation always succeeds for an authenticated caller; the service
    /// layer guarantees the acting username was resolved before this call.
    pub fn create(&self, draft: TaskDraft) -> i64 {
        let mut state = hold(&self.state);
        let id = state.next_id;
        state.next_id += 1;
        state.tasks.push(Task::new(id, draft));
        save_best_effort(&self.path, &state.tasks);
        id
    }

    /// Overwrites every mutable field of task `id`.
    ///
    /// Returns `false` when the task does not exist or `acting` may not
    /// touch it; the two cases are indistinguishable by contract. `id` and
    /// `created_at` survive any update.
    pub fn update(&self, id: i64, change: TaskChange, acting: &str) -> bool {
        let mut state = hold(&self.state);
        let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        if !task.accessible_to(acting) {
            return false;
        }
        task.apply(change);
        save_best_effort(&self.path, &state.tasks);
        true
    }

    /// Removes task `id`, with the same not-found/no-permission collapse
    /// as [`TaskStore::update`].
    pub fn delete(&self, id: i64, acting: &str) -> bool {
        let mut state = hold(&self.state);
        let Some(position) = state.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        if !state.tasks[position].accessible_to(acting) {
            return false;
        }
        state.tasks.remove(position);
        save_best_effort(&self.path, &state.tasks);
        true
    }

    /// Returns task `id` iff it exists and `acting` may read it.
    pub fn get(&self, id: i64, acting: &str) -> Option<Task> {
        hold(&self.state)
            .tasks
            .iter()
            .find(|task| task.id == id && task.accessible_to(acting))
            .cloned()
    }

    /// Unshared tasks assigned to `acting`, in insertion order.
    pub fn personal(&self, acting: &str) -> Vec<Task> {
        hold(&self.state)
            .tasks
            .iter()
            .filter(|task| task.assigned_to == acting && !task.is_shared)
            .cloned()
            .collect()
    }

    /// All shared tasks, in insertion order. Every authenticated user sees
    /// the same list; the caller does not filter it.
    pub fn shared(&self) -> Vec<Task> {
        hold(&self.state)
            .tasks
            .iter()
            .filter(|task| task.is_shared)
            .cloned()
            .collect()
    }

    /// Rewrites the tasks file from current memory state.
    ///
    /// # Errors
    /// - Propagates the I/O failure; memory state is unaffected.
    pub fn flush(&self) -> io::Result<()> {
        let state = hold(&self.state);
        write_lines(&self.path, &encode(&state.tasks))
    }
}

fn save_best_effort(path: &Path, tasks: &[Task]) {
    if let Err(err) = write_lines(path, &encode(tasks)) {
        error!(
            "event=store_save module=task_store status=error file={} error={}",
            path.display(),
            err
        );
    }
}

fn encode(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(encode_task).collect()
}
