//! Note storage seam.
//!
//! Handlers only see [`NoteStore`]; the binary wires in [`PgNoteStore`] and the
//! tests use [`MemoryNoteStore`].

use derive_more::Display;
use uuid::Uuid;

use crate::models::note::{NewNote, Note, NoteChanges};

pub mod memory;
pub mod postgres;

pub use memory::MemoryNoteStore;
pub use postgres::PgNoteStore;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "pool error: {}", _0)]
    Pool(r2d2::Error),
    #[display(fmt = "query error: {}", _0)]
    Query(diesel::result::Error),
    #[display(fmt = "store lock poisoned")]
    Poisoned,
}

impl std::error::Error for StoreError {}

impl From<r2d2::Error> for StoreError {
    fn from(e: r2d2::Error) -> StoreError {
        StoreError::Pool(e)
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(e: diesel::result::Error) -> StoreError {
        StoreError::Query(e)
    }
}

/// The four operations the API needs. Implementations are shared across
/// workers, so they must be usable from several threads at once.
pub trait NoteStore: Send + Sync {
    /// Every stored note, in whatever order the store yields them.
    fn list_all(&self) -> Result<Vec<Note>, StoreError>;

    /// Stores a new note and returns the identifier the store assigned.
    fn insert(&self, note: NewNote) -> Result<Uuid, StoreError>;

    /// Returns `true` if a note was removed.
    fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Merges `changes` into the matching note. Returns `true` if one matched.
    fn update_by_id(&self, id: Uuid, changes: NoteChanges) -> Result<bool, StoreError>;
}
