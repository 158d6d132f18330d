use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::{
    errors::ServerError,
    models::note::{NewNote, NoteChanges},
    store::{NoteStore, StoreError},
};

#[derive(Clone, Copy, Debug)]
enum Operation {
    List,
    Insert,
    Delete,
    Update,
}

impl Operation {
    fn action(self) -> &'static str {
        match self {
            Operation::List => "retrieving notes",
            Operation::Insert => "adding a note",
            Operation::Delete => "deleting the note",
            Operation::Update => "updating the note",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "An error occurred while retrieving notes.",
            Operation::Insert => "An error occurred while adding a note.",
            Operation::Delete => "An error occurred while deleting the note.",
            Operation::Update => "An error occurred while updating the note.",
        }
    }
}

/// Runs a store call on the blocking pool. Failures are logged here and
/// reach the client only as the generic message for `operation`.
async fn call<T, F>(
    store: web::Data<dyn NoteStore>,
    operation: Operation,
    f: F,
) -> Result<T, ServerError>
where
    F: FnOnce(&dyn NoteStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = store.into_inner();
    match web::block(move || f(store.as_ref())).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            log::error!("Error {}: {}", operation.action(), e);
            Err(ServerError::Internal(operation.failure_message()))
        }
        Err(e) => {
            log::error!("Error {}: blocking task failed: {}", operation.action(), e);
            Err(ServerError::Internal(operation.failure_message()))
        }
    }
}

pub async fn list(store: web::Data<dyn NoteStore>) -> Result<HttpResponse, ServerError> {
    let notes = call(store, Operation::List, |s| s.list_all()).await?;
    Ok(HttpResponse::Ok().json(notes))
}

pub async fn new(
    input: web::Json<NewNote>,
    store: web::Data<dyn NoteStore>,
) -> Result<HttpResponse, ServerError> {
    let note = input.into_inner();
    note.validate()?;

    let id = call(store, Operation::Insert, move |s| s.insert(note)).await?;
    log::debug!("added note {}", id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Note added successfully." })))
}

pub async fn del(
    note_id: web::Path<Uuid>,
    store: web::Data<dyn NoteStore>,
) -> Result<HttpResponse, ServerError> {
    let id = note_id.into_inner();

    if call(store, Operation::Delete, move |s| s.delete_by_id(id)).await? {
        Ok(HttpResponse::Ok().json(json!({ "ok": true })))
    } else {
        Err(ServerError::NotFound)
    }
}

pub async fn update(
    note_id: web::Path<Uuid>,
    input: web::Json<NoteChanges>,
    store: web::Data<dyn NoteStore>,
) -> Result<HttpResponse, ServerError> {
    let id = note_id.into_inner();
    let changes = input.into_inner();
    changes.validate()?;

    if call(store, Operation::Update, move |s| s.update_by_id(id, changes)).await? {
        Ok(HttpResponse::Ok().json(json!({ "message": "Note updated successfully." })))
    } else {
        Err(ServerError::NotFound)
    }
}
