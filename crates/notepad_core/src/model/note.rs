//! Note record.
//!
//! # Responsibility
//! - Define the canonical note shape shared by the store and storage.
//! - Keep the JSON field names stable (`createdAt`, `updatedAt`).
//!
//! # Invariants
//! - `id` is derived from creation time in epoch milliseconds. Two notes
//!   created within the same millisecond may share an id.
//! - `created_at` is never rewritten after creation.

use serde::{Deserialize, Serialize};

/// Identifier for a note, creation time in epoch milliseconds.
pub type NoteId = i64;

/// A user's text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// ISO-8601 UTC creation timestamp.
    pub created_at: String,
    /// ISO-8601 UTC timestamp of the last save.
    pub updated_at: String,
}

impl Note {
    /// Creates a note with explicit fields and `updated_at == created_at`.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        let created_at = created_at.into();
        Self {
            id,
            title: title.into(),
            content: content.into(),
            updated_at: created_at.clone(),
            created_at,
        }
    }

    /// Creates an empty draft with the given id and timestamp.
    pub fn blank(id: NoteId, timestamp: impl Into<String>) -> Self {
        Self::new(id, "", "", timestamp)
    }

    /// Returns whether the title is blank after trimming.
    pub fn is_untitled(&self) -> bool {
        self.title.trim().is_empty()
    }
}
