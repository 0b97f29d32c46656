use crate::models::ContentType;
use crate::Database;
use anyhow::Result;
use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};

/// Get a setting value by key
pub fn get_setting(db: &Database, key: &str) -> Result<Option<String>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?")?;
    let result = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(result)
}

/// Set a setting value (insert or update)
pub fn set_setting(db: &Database, key: &str, value: &str) -> Result<()> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = CURRENT_TIMESTAMP",
        [key, value],
    )?;
    Ok(())
}

// Slug sync setting keys
pub const SYNC_POST_TYPES: &str = "sync_post_types";

/// Content types eligible for auto-sync on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    pub post_types: Vec<ContentType>,
}

/// Read the stored allow-list. `None` means nothing usable is stored
/// (absent record or unparsable value) and callers fail open, treating
/// every type as eligible. A present, empty list is a real configuration:
/// no type is eligible.
pub fn get_sync_settings(db: &Database) -> Result<Option<SyncSettings>> {
    let Some(raw) = get_setting(db, SYNC_POST_TYPES)? else {
        return Ok(None);
    };
    Ok(serde_json::from_str(&raw).ok())
}

/// Replace the stored allow-list wholesale; there is no merge.
pub fn save_sync_settings(db: &Database, settings: &SyncSettings) -> Result<()> {
    set_setting(db, SYNC_POST_TYPES, &serde_json::to_string(settings)?)
}
