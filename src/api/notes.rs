//! Note Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{get_json, send_ignore, send_json};
use crate::error::ApiResult;
use crate::models::Note;

#[derive(Serialize)]
struct CreateNoteArgs<'a> {
    item_uuid: &'a str,
    note: &'a str,
}

#[derive(Serialize)]
struct ArchiveNoteArgs {
    archived: bool,
}

/// All notes attached to `item_uuid`, archived ones included
pub async fn list_notes(item_uuid: &str) -> ApiResult<Vec<Note>> {
    get_json(&["notes", item_uuid], &[]).await
}

pub async fn create_note(item_uuid: &str, note: &str) -> ApiResult<Note> {
    send_json(Method::POST, &["notes", item_uuid], &CreateNoteArgs { item_uuid, note }).await
}

pub async fn set_note_archived(note: &Note, archived: bool) -> ApiResult<()> {
    send_ignore(
        Method::PUT,
        &["notes", note.item_uuid.as_str(), note.uuid.as_str()],
        Some(&ArchiveNoteArgs { archived }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_note_body() {
        let body = CreateNoteArgs { item_uuid: "s1", note: "disk 3 replaced" };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "item_uuid": "s1", "note": "disk 3 replaced" })
        );
    }

    #[test]
    fn test_archive_note_body() {
        assert_eq!(
            serde_json::to_value(ArchiveNoteArgs { archived: true }).unwrap(),
            json!({ "archived": true })
        );
        assert_eq!(
            serde_json::to_value(ArchiveNoteArgs { archived: false }).unwrap(),
            json!({ "archived": false })
        );
    }
}
