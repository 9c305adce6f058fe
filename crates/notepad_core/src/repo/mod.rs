//! Persistence adapters between the note store and key-value storage.
//!
//! # Responsibility
//! - Serialize the full note list under one storage key.
//! - Report storage and decoding failures as semantic errors.
//!
//! # Invariants
//! - Writes always overwrite the whole list; there are no partial updates.

pub mod note_repo;
