use crate::services::content::ContentStore;
use crate::web::security::NonceManager;
use crate::{Config, Database};
use anyhow::Result;
use tera::Tera;

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub store: ContentStore,
    pub templates: Tera,
    pub nonce: NonceManager,
}

impl AppState {
    pub fn new(config: Config, db: Database, store: ContentStore) -> Result<Self> {
        let mut templates = Tera::default();
        templates.add_raw_templates(vec![
            ("admin/base.html", include_str!("../../templates/admin/base.html")),
            ("admin/settings.html", include_str!("../../templates/admin/settings.html")),
        ])?;

        let nonce = NonceManager::new(
            config.security.nonce_secret.clone(),
            config.security.nonce_ttl_secs,
        );

        Ok(Self {
            config,
            db,
            store,
            templates,
            nonce,
        })
    }
}
