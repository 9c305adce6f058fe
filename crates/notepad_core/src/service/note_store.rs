//! Note store: the single owner of note list UI state.
//!
//! # Responsibility
//! - Hold the ordered note list, its filtered view, the staged selection,
//!   the search text and the creation-mode flag.
//! - Write the full list back to storage after every save and delete.
//!
//! # Invariants
//! - Display order is insertion order; new notes are prepended.
//! - `selected` is a detached copy; edits reach the list only through `save`.
//! - After saving an existing note, the selection equals every listed entry
//!   with its id.
//! - Storage failures never reach callers. They are logged and the
//!   in-memory state still changes.

use crate::model::clock::{format_timestamp, Clock, SystemClock};
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteListRepository, RepoError, NOTES_STORAGE_KEY};
use crate::search::filter::filter_notes;
use crate::storage::KeyValueStorage;
use log::{debug, info, warn};

/// Store construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStoreConfig {
    /// Key under which the note list is persisted.
    pub storage_key: String,
}

impl Default for NoteStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: NOTES_STORAGE_KEY.to_string(),
        }
    }
}

/// Note list state manager with key-value persistence.
pub struct NoteStore<S: KeyValueStorage, C: Clock = SystemClock> {
    repo: NoteListRepository<S>,
    clock: C,
    notes: Vec<Note>,
    filtered_notes: Vec<Note>,
    selected: Option<Note>,
    search_text: String,
    is_creating: bool,
}

impl<S: KeyValueStorage> NoteStore<S, SystemClock> {
    /// Creates an empty store persisting under the default key.
    ///
    /// Nothing is read until [`NoteStore::load_initial`] is called.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, NoteStoreConfig::default())
    }

    /// Creates an empty store persisting under `config.storage_key`.
    pub fn with_config(storage: S, config: NoteStoreConfig) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }
}

impl<S: KeyValueStorage, C: Clock> NoteStore<S, C> {
    /// Creates an empty store with an explicit time source.
    pub fn with_clock(storage: S, config: NoteStoreConfig, clock: C) -> Self {
        Self {
            repo: NoteListRepository::with_key(storage, config.storage_key),
            clock,
            notes: Vec::new(),
            filtered_notes: Vec::new(),
            selected: None,
            search_text: String::new(),
            is_creating: false,
        }
    }

    /// Replaces in-memory state with the persisted list.
    ///
    /// Unavailable storage, an absent key, or malformed data all load as an
    /// empty list. The first note becomes the selection.
    pub fn load_initial(&mut self) {
        let notes = match self.repo.load_notes() {
            Ok(notes) => {
                info!(
                    "event=notes_load module=store status=ok key={} count={}",
                    self.repo.key(),
                    notes.len()
                );
                notes
            }
            Err(err) => {
                log_storage_fallback("notes_load", self.repo.key(), &err);
                Vec::new()
            }
        };

        self.filtered_notes = notes.clone();
        self.selected = notes.first().cloned();
        self.notes = notes;
        self.is_creating = false;
    }

    /// Stages a copy of `note` for editing and leaves creation mode.
    pub fn select(&mut self, note: &Note) {
        self.selected = Some(note.clone());
        self.is_creating = false;
    }

    /// Stages a blank note with a time-based id and enters creation mode.
    ///
    /// The draft is not part of the list until it is saved.
    pub fn start_create(&mut self) -> &Note {
        let now = self.clock.now();
        let draft = Note::blank(now.timestamp_millis(), format_timestamp(now));
        debug!("event=note_create_start module=store id={}", draft.id);
        self.is_creating = true;
        self.selected.insert(draft)
    }

    /// Commits `note` to the list and persists the whole list.
    ///
    /// In creation mode the note is prepended. Otherwise every entry with the
    /// same id is replaced in place by `note`, all fields included; an
    /// unknown id leaves the list untouched. Either way `updated_at` is
    /// refreshed, creation mode ends, and the saved note becomes the selection.
    pub fn save(&mut self, note: Note) {
        let saved = Note {
            updated_at: self.clock.now_timestamp(),
            ..note
        };

        if self.is_creating {
            self.notes.insert(0, saved.clone());
            info!(
                "event=note_save module=store status=ok mode=create id={} count={}",
                saved.id,
                self.notes.len()
            );
        } else {
            let mut replaced = 0;
            for existing in self.notes.iter_mut().filter(|n| n.id == saved.id) {
                existing.clone_from(&saved);
                replaced += 1;
            }
            if replaced == 0 {
                warn!(
                    "event=note_save module=store status=miss mode=update id={}",
                    saved.id
                );
            } else {
                info!(
                    "event=note_save module=store status=ok mode=update id={} replaced={replaced}",
                    saved.id
                );
            }
        }

        self.is_creating = false;
        self.selected = Some(saved);
        self.persist();
        self.apply_filter();
    }

    /// Saves the staged selection, if any.
    pub fn save_selected(&mut self) {
        if let Some(note) = self.selected.clone() {
            self.save(note);
        }
    }

    /// Removes the entry whose id matches `note`.
    ///
    /// Returns `false` without touching storage when no entry matches. When
    /// the removed note was selected, the first filtered note (or nothing)
    /// becomes the selection.
    pub fn delete(&mut self, note: &Note) -> bool {
        let Some(index) = self.notes.iter().position(|n| n.id == note.id) else {
            debug!("event=note_delete module=store status=miss id={}", note.id);
            return false;
        };

        self.notes.remove(index);
        info!(
            "event=note_delete module=store status=ok id={} count={}",
            note.id,
            self.notes.len()
        );
        self.persist();
        self.apply_filter();

        if self.selected.as_ref().is_some_and(|s| s.id == note.id) {
            self.selected = self.filtered_notes.first().cloned();
            self.is_creating = false;
        }
        true
    }

    /// Recomputes the filtered view from the current search text.
    pub fn apply_filter(&mut self) {
        self.filtered_notes = filter_notes(&self.notes, &self.search_text);
        debug!(
            "event=notes_filter module=store total={} visible={}",
            self.notes.len(),
            self.filtered_notes.len()
        );
    }

    /// Re-applies the filter and keeps the selection inside the results.
    ///
    /// A selection that is filtered out (or missing) moves to the first
    /// visible note; with no visible notes the selection is cleared.
    pub fn on_search_change(&mut self) {
        self.apply_filter();

        if self.filtered_notes.is_empty() {
            self.selected = None;
            self.is_creating = false;
            return;
        }

        let still_visible = self
            .selected
            .as_ref()
            .is_some_and(|s| self.filtered_notes.iter().any(|n| n.id == s.id));
        if !still_visible {
            self.selected = self.filtered_notes.first().cloned();
            self.is_creating = false;
        }
    }

    /// Replaces the search text and reconciles the selection.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.on_search_change();
    }

    /// Looks up a note in the full list by id.
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn filtered_notes(&self) -> &[Note] {
        &self.filtered_notes
    }

    pub fn selected(&self) -> Option<&Note> {
        self.selected.as_ref()
    }

    /// Mutable access to the staged copy. Changes stay local until saved.
    pub fn selected_mut(&mut self) -> Option<&mut Note> {
        self.selected.as_mut()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_creating(&self) -> bool {
        self.is_creating
    }

    pub fn storage(&self) -> &S {
        self.repo.storage()
    }

    pub fn storage_mut(&mut self) -> &mut S {
        self.repo.storage_mut()
    }

    pub fn into_storage(self) -> S {
        self.repo.into_storage()
    }

    fn persist(&mut self) {
        match self.repo.save_notes(&self.notes) {
            Ok(()) => debug!(
                "event=notes_persist module=store status=ok key={} count={}",
                self.repo.key(),
                self.notes.len()
            ),
            Err(err) => log_storage_fallback("notes_persist", self.repo.key(), &err),
        }
    }
}

fn log_storage_fallback(event: &str, key: &str, err: &RepoError) {
    if err.is_unavailable() {
        info!("event={event} module=store status=skipped key={key} reason=storage_unavailable");
    } else {
        warn!("event={event} module=store status=skipped key={key} error={err}");
    }
}
