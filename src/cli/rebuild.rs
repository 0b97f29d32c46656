use crate::models::ContentScope;
use crate::services::sync::{self, Synchronizer};
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, post_type: &str) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;

    db.migrate()?;

    let scope: ContentScope = post_type
        .parse()
        .map_err(|e| anyhow::anyhow!("{}; use a content type or \"any\"", e))?;

    let store = Synchronizer::wire(db);
    let total = store.count(scope)?;
    let rebuilt = sync::rebuild_slugs(&store, scope)?;

    println!("Rebuilt {} of {} item(s).", rebuilt, total);

    Ok(())
}
