use crate::models::ContentScope;
use crate::services::sync;
use crate::web::error::AppResult;
use crate::web::security::REBUILD_ACTION;
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RebuildForm {
    pub nonce: String,
    pub post_type: String,
}

/// Bulk slug rebuild. Reachable without a session; the nonce is the only
/// gate, and a bad one terminates the request before any item is touched.
pub async fn rebuild(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RebuildForm>,
) -> AppResult<Response> {
    if !state.nonce.verify(&form.nonce, REBUILD_ACTION) {
        return Ok((StatusCode::FORBIDDEN, "Try harder ;)").into_response());
    }

    // An unknown type matches nothing; that is still a success.
    let Ok(scope) = form.post_type.parse::<ContentScope>() else {
        return Ok(StatusCode::OK.into_response());
    };

    let rebuilt = sync::rebuild_slugs(&state.store, scope)?;
    tracing::info!("Rebuilt {} slug(s) for scope {}", rebuilt, scope);

    Ok(StatusCode::OK.into_response())
}
