//! Core use-case services.
//!
//! # Responsibility
//! - Own session transitions and orchestrate repository calls.
//! - Keep the rendering layer decoupled from storage details.

pub mod app;
pub mod session_service;
