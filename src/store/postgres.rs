use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel::sql_types::{Nullable, Text};
use uuid::Uuid;

use super::{NoteStore, StoreError};
use crate::config::StoreConfig;
use crate::models::note::{NewNote, Note, NoteChanges};

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(QueryableByName)]
struct InsertedId {
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    id: Uuid,
}

/// Notes kept in one PostgreSQL table. The table name comes from config and
/// has already been checked to be a bare identifier.
pub struct PgNoteStore {
    pool: Pool,
    table: String,
}

impl PgNoteStore {
    /// Opens the pool and creates the table if it is missing.
    ///
    /// Building the pool fails if no connection can be established, so a
    /// returned store is ready to serve.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<PgConnection>::new(config.connection_url());
        let pool = r2d2::Pool::builder().build(manager)?;
        let store = Self {
            pool,
            table: format!("\"{}\"", config.collection_name),
        };
        store.ensure_table()?;
        Ok(store)
    }

    fn ensure_table(&self) -> Result<(), StoreError> {
        let mut connection = self.pool.get()?;
        // gen_random_uuid() is built in since PostgreSQL 13
        diesel::sql_query(format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id      UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                title   TEXT NOT NULL,
                content TEXT NOT NULL
            )",
            self.table
        ))
        .execute(&mut connection)?;
        Ok(())
    }
}

impl NoteStore for PgNoteStore {
    fn list_all(&self) -> Result<Vec<Note>, StoreError> {
        let mut connection = self.pool.get()?;
        let notes = diesel::sql_query(format!("SELECT id, title, content FROM {}", self.table))
            .load::<Note>(&mut connection)?;
        Ok(notes)
    }

    fn insert(&self, note: NewNote) -> Result<Uuid, StoreError> {
        let mut connection = self.pool.get()?;
        let inserted = diesel::sql_query(format!(
            "INSERT INTO {} (title, content) VALUES ($1, $2) RETURNING id",
            self.table
        ))
        .bind::<Text, _>(note.title)
        .bind::<Text, _>(note.content)
        .get_result::<InsertedId>(&mut connection)?;
        Ok(inserted.id)
    }

    fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut connection = self.pool.get()?;
        let deleted = diesel::sql_query(format!("DELETE FROM {} WHERE id = $1", self.table))
            .bind::<diesel::sql_types::Uuid, _>(id)
            .execute(&mut connection)?;
        Ok(deleted == 1)
    }

    fn update_by_id(&self, id: Uuid, changes: NoteChanges) -> Result<bool, StoreError> {
        let mut connection = self.pool.get()?;
        let matched = diesel::sql_query(format!(
            "UPDATE {} SET title = COALESCE($2, title), content = COALESCE($3, content) WHERE id = $1",
            self.table
        ))
        .bind::<diesel::sql_types::Uuid, _>(id)
        .bind::<Nullable<Text>, _>(changes.title)
        .bind::<Nullable<Text>, _>(changes.content)
        .execute(&mut connection)?;
        Ok(matched == 1)
    }
}
