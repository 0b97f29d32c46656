use crate::models::{Content, ContentScope, ContentType, CreateContent, SaveEvent, UpdateContent};
use crate::services::revisions;
use crate::services::slug::{generate_slug, validate_slug};
use crate::Database;
use anyhow::{bail, Result};
use std::sync::Arc;

/// Notified after every content write. Listener registration happens once
/// at startup; there is no runtime attach/detach.
pub trait SaveListener: Send + Sync {
    fn on_save(&self, store: &ContentStore, event: &SaveEvent);
}

/// All content writes go through here so every save, including the ones
/// a listener performs, dispatches to the same listener table.
pub struct ContentStore {
    db: Database,
    listeners: Vec<Arc<dyn SaveListener>>,
}

impl ContentStore {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            listeners: Vec::new(),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn SaveListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    fn dispatch(&self, event: SaveEvent) {
        for listener in &self.listeners {
            listener.on_save(self, &event);
        }
    }

    pub fn create(&self, input: CreateContent) -> Result<i64> {
        let slug = input.slug.unwrap_or_else(|| generate_slug(&input.title));

        if !validate_slug(&slug) {
            bail!(
                "Invalid slug: must be 1-200 characters, lowercase letters, numbers, and hyphens only"
            );
        }

        let conn = self.db.get()?;
        conn.execute(
            "INSERT INTO content (slug, title, content_type, body) VALUES (?1, ?2, ?3, ?4)",
            (
                &slug,
                &input.title,
                input.content_type.to_string(),
                &input.body,
            ),
        )?;
        let content_id = conn.last_insert_rowid();
        drop(conn);

        self.dispatch(SaveEvent {
            content_id,
            is_revision: false,
        });

        Ok(content_id)
    }

    pub fn update(&self, id: i64, input: UpdateContent) -> Result<()> {
        let current = match self.get(id)? {
            Some(c) => c,
            None => bail!("No content with id {}", id),
        };

        // Snapshot first; the snapshot itself is a (revision) save.
        self.snapshot(id)?;

        let title = input.title.unwrap_or(current.title);
        let body = input.body.unwrap_or(current.body);

        let conn = self.db.get()?;
        conn.execute(
            "UPDATE content SET title = ?1, body = ?2, updated_at = CURRENT_TIMESTAMP WHERE id = ?3",
            (&title, &body, id),
        )?;
        drop(conn);

        self.dispatch(SaveEvent {
            content_id: id,
            is_revision: false,
        });

        Ok(())
    }

    /// Record a revision snapshot of the current state. Dispatched as a
    /// revision-flagged save, which listeners are expected to skip.
    pub fn snapshot(&self, id: i64) -> Result<i64> {
        let revision_id = revisions::create_revision(&self.db, id)?;
        self.dispatch(SaveEvent {
            content_id: id,
            is_revision: true,
        });
        Ok(revision_id)
    }

    /// Rewrite only the slug column. This is the write both the
    /// synchronizer and the bulk rebuild use.
    pub fn update_slug(&self, id: i64, slug: &str) -> Result<()> {
        let conn = self.db.get()?;
        conn.execute(
            "UPDATE content SET slug = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = ?2",
            (slug, id),
        )?;
        drop(conn);

        self.dispatch(SaveEvent {
            content_id: id,
            is_revision: false,
        });

        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Option<Content>> {
        let conn = self.db.get()?;
        let content = conn
            .query_row(
                "SELECT id, slug, title, content_type, body, created_at, updated_at FROM content WHERE id = ?",
                [id],
                row_to_content,
            )
            .ok();
        Ok(content)
    }

    /// Load every item in scope. No pagination: bulk rebuild wants the
    /// whole set in one query.
    pub fn list(&self, scope: ContentScope) -> Result<Vec<Content>> {
        let conn = self.db.get()?;

        let content = match scope {
            ContentScope::Any => {
                let mut stmt = conn.prepare(
                    "SELECT id, slug, title, content_type, body, created_at, updated_at FROM content ORDER BY created_at DESC",
                )?;
                let rows = stmt
                    .query_map([], row_to_content)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            ContentScope::Type(content_type) => {
                let mut stmt = conn.prepare(
                    "SELECT id, slug, title, content_type, body, created_at, updated_at FROM content WHERE content_type = ? ORDER BY created_at DESC",
                )?;
                let rows = stmt
                    .query_map([content_type.to_string()], row_to_content)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok(content)
    }

    pub fn count(&self, scope: ContentScope) -> Result<i64> {
        let conn = self.db.get()?;
        let count: i64 = match scope {
            ContentScope::Any => {
                conn.query_row("SELECT COUNT(*) FROM content", [], |row| row.get(0))?
            }
            ContentScope::Type(content_type) => conn.query_row(
                "SELECT COUNT(*) FROM content WHERE content_type = ?",
                [content_type.to_string()],
                |row| row.get(0),
            )?,
        };
        Ok(count)
    }
}

fn row_to_content(row: &rusqlite::Row) -> rusqlite::Result<Content> {
    Ok(Content {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        content_type: row
            .get::<_, String>(3)?
            .parse()
            .unwrap_or(ContentType::Post),
        body: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
