//! Note Commands
//!
//! Notes live on the membership API.

use log::debug;

use super::{batch, decode};
use crate::domain::{is_missing, DomainError, DomainResult, Note};
use crate::gateway::{Gateway, ServiceName};

const SERVICE: ServiceName = ServiceName::MembershipApi;

pub fn notes_path(content_type: &str, content_id: &str) -> String {
    format!("/notes/{}/{}", content_type, content_id)
}

pub fn note_path(id: &str) -> String {
    format!("/notes/{}", id)
}

/// All notes attached to one record
pub async fn list_notes(gateway: &dyn Gateway, content_type: &str, content_id: &str) -> DomainResult<Vec<Note>> {
    let value = gateway.get(&notes_path(content_type, content_id), SERVICE).await?;
    let notes: Vec<Note> = decode(value)?;
    debug!("[NOTES] {} notes for {}/{}", notes.len(), content_type, content_id);
    Ok(notes)
}

/// Create or update notes as one batch
pub async fn save_notes(gateway: &dyn Gateway, notes: &[Note]) -> DomainResult<()> {
    gateway.post("/notes", batch(notes)?, SERVICE).await?;
    Ok(())
}

pub async fn delete_note(gateway: &dyn Gateway, id: &str) -> DomainResult<()> {
    if is_missing(Some(id)) {
        return Err(DomainError::MissingId);
    }
    gateway.delete(&note_path(id), SERVICE).await
}
