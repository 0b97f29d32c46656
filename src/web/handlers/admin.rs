use crate::models::ContentType;
use crate::services::settings::{self, SyncSettings};
use crate::web::error::AppResult;
use crate::web::security::REBUILD_ACTION;
use crate::web::state::AppState;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tera::Context;

#[derive(Serialize)]
struct TypeOption {
    value: String,
    label: &'static str,
    selected: bool,
}

pub async fn index() -> Redirect {
    Redirect::to("/admin/settings")
}

pub async fn settings(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    // Absent or malformed configuration renders with nothing selected;
    // the synchronizer still fails open until the form is first saved.
    let selected = settings::get_sync_settings(&state.db)?
        .map(|s| s.post_types)
        .unwrap_or_default();

    let post_types: Vec<TypeOption> = ContentType::ALL
        .iter()
        .map(|t| TypeOption {
            value: t.to_string(),
            label: t.label(),
            selected: selected.contains(t),
        })
        .collect();

    let mut ctx = Context::new();
    ctx.insert("post_types", &post_types);
    ctx.insert("rebuild_nonce", &state.nonce.create(REBUILD_ACTION));
    ctx.insert("version", env!("CARGO_PKG_VERSION"));

    let html = state.templates.render("admin/settings.html", &ctx)?;
    Ok(Html(html))
}

#[derive(Deserialize)]
pub struct SyncSettingsForm {
    #[serde(default)]
    post_types: Vec<String>,
}

/// Replaces the stored allow-list with the submitted multi-select.
pub async fn save_settings(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SyncSettingsForm>,
) -> AppResult<Response> {
    let post_types = form
        .post_types
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    settings::save_sync_settings(&state.db, &SyncSettings { post_types })?;

    Ok(Redirect::to("/admin/settings").into_response())
}
