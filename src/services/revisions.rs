//! Content revision snapshots.
//!
//! A snapshot is taken before every content update so the previous state
//! stays queryable. Revision writes are save events too, but flagged so
//! the slug synchronizer leaves them alone.

use crate::Database;
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ContentRevision {
    pub id: i64,
    pub content_id: i64,
    pub revision_number: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub created_at: String,
}

/// Snapshot the current state of a content item. Call this BEFORE
/// applying updates to preserve the previous state.
pub fn create_revision(db: &Database, content_id: i64) -> Result<i64> {
    let conn = db.get()?;

    let (title, slug, body): (String, String, String) = conn.query_row(
        "SELECT title, slug, body FROM content WHERE id = ?",
        [content_id],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    let revision_number = next_revision_number(&conn, content_id)?;

    conn.execute(
        r#"
        INSERT INTO content_revisions (content_id, revision_number, title, slug, body)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        rusqlite::params![content_id, revision_number, title, slug, body],
    )?;

    let revision_id = conn.last_insert_rowid();
    tracing::debug!(
        "Created revision {} (r{}) for content {}",
        revision_id,
        revision_number,
        content_id
    );

    Ok(revision_id)
}

/// Most recent snapshot for a content item, if any.
pub fn latest_revision(db: &Database, content_id: i64) -> Result<Option<ContentRevision>> {
    let conn = db.get()?;
    let revision = conn
        .query_row(
            r#"
            SELECT id, content_id, revision_number, title, slug, body, created_at
            FROM content_revisions
            WHERE content_id = ?1
            ORDER BY revision_number DESC
            LIMIT 1
            "#,
            [content_id],
            |row| {
                Ok(ContentRevision {
                    id: row.get(0)?,
                    content_id: row.get(1)?,
                    revision_number: row.get(2)?,
                    title: row.get(3)?,
                    slug: row.get(4)?,
                    body: row.get(5)?,
                    created_at: row.get(6)?,
                })
            },
        )
        .ok();
    Ok(revision)
}

pub fn count_revisions(db: &Database, content_id: i64) -> Result<i64> {
    let conn = db.get()?;
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM content_revisions WHERE content_id = ?1",
        [content_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn next_revision_number(conn: &Connection, content_id: i64) -> Result<i64> {
    let max: Option<i64> = conn
        .query_row(
            "SELECT MAX(revision_number) FROM content_revisions WHERE content_id = ?1",
            [content_id],
            |row| row.get(0),
        )
        .unwrap_or(None);

    Ok(max.unwrap_or(0) + 1)
}
