//! Domain model for sessions and tasks.
//!
//! # Responsibility
//! - Define the records the session store and task repository own.
//! - Keep wire-format mapping next to the types it describes.
//!
//! # Invariants
//! - Invalid task status combinations are unrepresentable in memory.

pub mod session;
pub mod task;
