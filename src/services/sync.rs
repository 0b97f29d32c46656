//! Keeps content slugs synchronized with titles.
//!
//! The synchronizer runs on every save; the bulk rebuild rewrites a whole
//! scope on demand. Both derive the slug the same way; only the save path
//! honors the configured allow-list.

use crate::models::{ContentScope, SaveEvent};
use crate::services::content::{ContentStore, SaveListener};
use crate::services::settings;
use crate::services::slug::generate_slug;
use crate::Database;
use anyhow::Result;
use std::cell::Cell;
use std::sync::Arc;

thread_local! {
    // Set while a sync write is in flight. The save path never awaits, so
    // one externally-triggered save stays on one thread and the flag
    // scopes the guard to that call chain.
    static SYNC_IN_PROGRESS: Cell<bool> = const { Cell::new(false) };
}

struct GuardReset;

impl Drop for GuardReset {
    fn drop(&mut self) {
        SYNC_IN_PROGRESS.with(|flag| flag.set(false));
    }
}

/// Recomputes an item's slug from its title whenever an eligible,
/// non-revision save happens.
pub struct Synchronizer;

impl Synchronizer {
    pub fn new() -> Self {
        Self
    }

    /// Build a store whose saves keep slugs in sync.
    pub fn wire(db: Database) -> ContentStore {
        ContentStore::new(db).with_listener(Arc::new(Self::new()))
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveListener for Synchronizer {
    fn on_save(&self, store: &ContentStore, event: &SaveEvent) {
        // Revisions never get their slug synced.
        if event.is_revision {
            return;
        }

        // The slug write below is itself a save; don't chase it.
        if SYNC_IN_PROGRESS.with(Cell::get) {
            return;
        }

        let content = match store.get(event.content_id) {
            Ok(Some(content)) => content,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("Slug sync: failed to load content {}: {}", event.content_id, e);
                return;
            }
        };

        match settings::get_sync_settings(store.db()) {
            // Configured and this type is not on the list.
            Ok(Some(cfg)) if !cfg.post_types.contains(&content.content_type) => return,
            // Eligible, or no usable configuration (fail-open).
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Slug sync: failed to read settings: {}", e);
                return;
            }
        }

        SYNC_IN_PROGRESS.with(|flag| flag.set(true));
        let _reset = GuardReset;

        if let Err(e) = store.update_slug(content.id, &generate_slug(&content.title)) {
            tracing::error!("Slug sync: failed to update content {}: {}", content.id, e);
        }
    }
}

/// Rewrite the slug of every item in scope from its current title.
///
/// The allow-list is deliberately not consulted here: the requested scope
/// wins. A failed write is logged and the remaining items are still
/// processed. Returns how many items were rewritten.
pub fn rebuild_slugs(store: &ContentStore, scope: ContentScope) -> Result<usize> {
    let items = store.list(scope)?;
    let mut rebuilt = 0;

    for item in &items {
        match store.update_slug(item.id, &generate_slug(&item.title)) {
            Ok(()) => rebuilt += 1,
            Err(e) => {
                tracing::warn!("Rebuild: failed to update content {}: {}", item.id, e);
            }
        }
    }

    Ok(rebuilt)
}
