//! Notes Helpers
//!
//! Pure logic behind the notes widget: filtering, date display,
//! input normalization and dropdown placement.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::Note;

/// Which way the notes dropdown extends from its badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropDirection {
    /// Panel's right edge lines up with the badge's right edge
    #[default]
    Left,
    /// Panel's left edge lines up with the badge's left edge
    Right,
}

/// Viewport-relative box of an element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Notes that have not been archived, in server order
pub fn active_notes(notes: &[Note]) -> Vec<Note> {
    notes.iter().filter(|n| !n.archived).cloned().collect()
}

pub fn active_count(notes: &[Note]) -> usize {
    notes.iter().filter(|n| !n.archived).count()
}

/// Notes to list in the panel
pub fn visible_notes(notes: &[Note], show_archived: bool) -> Vec<Note> {
    if show_archived {
        notes.to_vec()
    } else {
        active_notes(notes)
    }
}

/// Author shown on a note row; notes created by the system have no owner
pub fn note_author(note: &Note) -> String {
    match note.owner_uuid.as_deref() {
        Some(owner) if !owner.is_empty() => owner.to_string(),
        _ => "system".to_string(),
    }
}

/// Trimmed note text, or `None` when nothing is left to save
pub fn normalize_note_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Long UTC date, e.g. `September 4, 1986 8:30 PM`. Unparseable input is
/// shown as-is.
pub fn format_note_date(created: &str) -> String {
    match DateTime::parse_from_rfc3339(created) {
        Ok(dt) => dt.with_timezone(&Utc).format("%B %-d, %Y %-I:%M %p").to_string(),
        Err(_) => created.to_string(),
    }
}

/// Viewport offset (top, left) for the dropdown panel below `badge`
pub fn dropdown_position(badge: Rect, panel_width: f64, drop: DropDirection) -> (f64, f64) {
    let top = badge.top + badge.height;
    let left = match drop {
        DropDirection::Left => badge.left - panel_width + badge.width,
        DropDirection::Right => badge.left,
    };
    (top, left)
}

/// CSS classes for the count badge
pub fn badge_class(count: usize, open: bool) -> String {
    let mut classes = vec!["notes-count"];
    if count > 0 {
        classes.push("has-notes");
    }
    if open {
        classes.push("open");
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_note(uuid: &str, archived: bool) -> Note {
        Note {
            uuid: uuid.to_string(),
            item_uuid: "server-1".to_string(),
            owner_uuid: Some("admin".to_string()),
            note: format!("note {}", uuid),
            created: Some("2014-03-01T17:05:00.000Z".to_string()),
            archived,
        }
    }

    #[test]
    fn test_note_author() {
        assert_eq!(note_author(&make_note("a", false)), "admin");

        let mut note = make_note("b", false);
        note.owner_uuid = None;
        assert_eq!(note_author(&note), "system");
        note.owner_uuid = Some(String::new());
        assert_eq!(note_author(&note), "system");
    }

    #[test]
    fn test_archiving_removes_from_active_list() {
        let mut notes = vec![make_note("a", false), make_note("b", false)];
        assert_eq!(active_count(&notes), 2);

        // What the refetch returns after archiving "a"
        notes[0].archived = true;
        let active = active_notes(&notes);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].uuid, "b");
        assert_eq!(active_count(&notes), 1);
    }

    #[test]
    fn test_visible_notes_with_archived() {
        let notes = vec![make_note("a", true), make_note("b", false)];
        assert_eq!(visible_notes(&notes, true).len(), 2);
        assert_eq!(visible_notes(&notes, false)[0].uuid, "b");
    }

    #[test]
    fn test_normalize_note_input() {
        assert_eq!(normalize_note_input("  hello \n"), Some("hello".to_string()));
        assert_eq!(normalize_note_input(" \t\n "), None);
        assert_eq!(normalize_note_input(""), None);
    }

    #[test]
    fn test_format_note_date() {
        assert_eq!(format_note_date("2014-03-01T17:05:00.000Z"), "March 1, 2014 5:05 PM");
        // Offsets are converted to UTC
        assert_eq!(format_note_date("2014-03-01T09:30:00-08:00"), "March 1, 2014 5:30 PM");
        assert_eq!(format_note_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_dropdown_position() {
        let badge = Rect { top: 100.0, left: 500.0, width: 40.0, height: 20.0 };
        assert_eq!(dropdown_position(badge, 300.0, DropDirection::Left), (120.0, 240.0));
        assert_eq!(dropdown_position(badge, 300.0, DropDirection::Right), (120.0, 500.0));
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(0, false), "notes-count");
        assert_eq!(badge_class(3, true), "notes-count has-notes open");
    }
}
