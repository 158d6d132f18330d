use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use super::{NoteStore, StoreError};
use crate::models::note::{NewNote, Note, NoteChanges};

/// Process-local store. Notes are kept in insertion order and vanish with
/// the process.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: Mutex<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Note>>, StoreError> {
        self.notes.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl NoteStore for MemoryNoteStore {
    fn list_all(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn insert(&self, note: NewNote) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.lock()?.push(Note {
            id,
            title: note.title,
            content: note.content,
        });
        Ok(id)
    }

    fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut notes = self.lock()?;
        match notes.iter().position(|n| n.id == id) {
            Some(index) => {
                notes.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn update_by_id(&self, id: Uuid, changes: NoteChanges) -> Result<bool, StoreError> {
        let mut notes = self.lock()?;
        match notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                changes.apply_to(note);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
