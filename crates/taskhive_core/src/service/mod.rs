//! Core use-case services.
//!
//! # Responsibility
//! - Compose the three lock domains behind one API surface for callers.
//! - Keep presentation layers decoupled from store and file details.

pub mod task_manager;
