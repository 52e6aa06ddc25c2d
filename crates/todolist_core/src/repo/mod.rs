//! Repository layer over the key-value store.
//!
//! # Responsibility
//! - Own the task collection and its persistence round-trip.
//! - Keep encoding details out of the session and facade layers.

pub mod task_repo;
