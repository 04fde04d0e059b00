use crate::errors::ValidationError;
use crate::models::{new_id, Note};
use chrono::{DateTime, Local};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewNote {
    pub content: String,
}

/// Newest notes come first.
pub fn add_note(
    notes: &mut Vec<Note>,
    content: &str,
    now: DateTime<Local>,
) -> Result<Note, ValidationError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ValidationError::Empty("note"));
    }
    let note = Note {
        id: new_id(),
        content: content.to_string(),
        created_at: now,
    };
    notes.insert(0, note.clone());
    Ok(note)
}

pub fn delete_note(notes: &mut Vec<Note>, id: &str) -> bool {
    let before = notes.len();
    notes.retain(|note| note.id != id);
    notes.len() != before
}
