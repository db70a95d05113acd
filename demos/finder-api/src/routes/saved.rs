use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use precon_finder::Deck;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/saved
///
/// Saved deck ids and the decks they resolve to.
pub async fn list_saved(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let (ids, decks): (Vec<String>, Vec<Deck>) = state
        .finder
        .run(|f| Ok((f.saved_ids(), f.saved_decks().into_iter().cloned().collect())))
        .await?;
    Ok(Json(json!({ "ids": ids, "data": decks })))
}

/// POST /api/saved/{id}
///
/// Toggle a deck's saved state.
pub async fn toggle_saved(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let saved = state.finder.toggle_saved(&id).await?;
    Ok(Json(json!({ "id": id, "saved": saved })))
}

/// DELETE /api/saved/{id}
pub async fn remove_saved(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let key = id.clone();
    let removed = state.finder.run(move |f| f.remove_saved(&key)).await?;
    Ok(Json(json!({ "id": id, "removed": removed })))
}

/// DELETE /api/saved
pub async fn clear_saved(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    state.finder.run(|f| f.clear_saved()).await?;
    Ok(Json(json!({ "ids": [] })))
}
