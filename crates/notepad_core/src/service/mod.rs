//! Core use-case services.
//!
//! # Responsibility
//! - Own user-facing note state and orchestrate persistence around it.
//! - Keep front-ends decoupled from storage details.

pub mod note_store;
