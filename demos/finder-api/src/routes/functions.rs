use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use precon_finder::flavor::DeckIntroRequest;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// POST /functions/generate-deck-intros
///
/// One LLM-written intro line per top match.
pub async fn generate_deck_intros(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeckIntroRequest>,
) -> Result<Json<Value>, AppError> {
    if req.matches.is_empty() {
        return Err(AppError::bad_request("matches must not be empty"));
    }
    let intros = state.finder.run(move |f| f.deck_intros(&req)).await?;
    tracing::info!(count = intros.len(), "generated deck intros");
    Ok(Json(json!({ "intros": intros })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationRequest {
    pub custom_text: String,
}

/// POST /functions/generate-loading-interpretation
pub async fn generate_loading_interpretation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InterpretationRequest>,
) -> Result<Json<Value>, AppError> {
    let interpretation = state.finder.interpretation(&req.custom_text).await?;
    Ok(Json(json!({ "interpretation": interpretation })))
}
