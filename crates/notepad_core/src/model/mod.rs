//! Domain model for the notepad core.
//!
//! # Responsibility
//! - Define the note record persisted to key-value storage.
//! - Provide the time source used for ids and timestamps.
//!
//! # Invariants
//! - A note is identified by its integer `id` only; titles may repeat.
//! - Timestamps are ISO-8601 UTC strings with millisecond precision.

pub mod clock;
pub mod note;
