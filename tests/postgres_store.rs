//! Runs against a live PostgreSQL (13+). Point `TEST_DATABASE_URL` at a
//! server and run with `--ignored`.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use notekeeper::{
    config::StoreConfig,
    models::note::{NewNote, NoteChanges},
    store::{NoteStore, PgNoteStore},
};
use uuid::Uuid;

/// Drops the scratch table when the test ends, pass or fail.
struct ScratchTable {
    config: StoreConfig,
}

impl Drop for ScratchTable {
    fn drop(&mut self) {
        match PgConnection::establish(&self.config.connection_url()) {
            Ok(mut connection) => {
                let drop_table = format!(
                    "DROP TABLE IF EXISTS \"{}\"",
                    self.config.collection_name
                );
                if let Err(e) = diesel::sql_query(drop_table).execute(&mut connection) {
                    eprintln!("failed to drop {}: {}", self.config.collection_name, e);
                }
            }
            Err(e) => eprintln!("failed to connect for cleanup: {}", e),
        }
    }
}

fn connect() -> (PgNoteStore, ScratchTable) {
    let connection_uri =
        std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let config = StoreConfig {
        connection_uri,
        database_name: std::env::var("TEST_DATABASE_NAME").unwrap_or_else(|_| "tutor".into()),
        collection_name: format!("notes_test_{}", Uuid::new_v4().simple()),
    };
    let store = PgNoteStore::connect(&config).expect("store should connect");
    (store, ScratchTable { config })
}

#[test]
#[ignore]
fn crud_against_postgres() {
    let (store, _table) = connect();
    assert!(store.list_all().unwrap().is_empty());

    let id = store
        .insert(NewNote {
            title: "Groceries".to_string(),
            content: "Milk, eggs".to_string(),
        })
        .unwrap();

    let changes = NoteChanges {
        title: None,
        content: Some("Milk, eggs, bread".to_string()),
    };
    assert!(store.update_by_id(id, changes.clone()).unwrap());
    assert!(!store.update_by_id(Uuid::new_v4(), changes).unwrap());

    let notes = store.list_all().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, id);
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].content, "Milk, eggs, bread");

    assert!(store.delete_by_id(id).unwrap());
    assert!(!store.delete_by_id(id).unwrap());
    assert!(store.list_all().unwrap().is_empty());
}
