use derive_more::Display;
use diesel::sql_types::Text;
use diesel::QueryableByName;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, QueryableByName, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: Uuid,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub content: String,
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "title is empty")]
    EmptyTitle,
    #[display(fmt = "content is empty")]
    EmptyContent,
    #[display(fmt = "no fields to update")]
    NoChanges,
}

/// Body of `POST /notes`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl NewNote {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Body of `PUT /notes/{id}`. Absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteChanges {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_none() && self.content.is_none() {
            return Err(ValidationError::NoChanges);
        }
        if let Some(t) = &self.title {
            if t.trim().is_empty() {
                return Err(ValidationError::EmptyTitle);
            }
        }
        if let Some(c) = &self.content {
            if c.trim().is_empty() {
                return Err(ValidationError::EmptyContent);
            }
        }
        Ok(())
    }

    /// Merges the present fields into `note`.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
    }
}
