use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use precon_finder::{PathType, QuizAnswer, UserPreferences};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default)]
    pub path: PathType,
    /// Preferences built by the client. Takes precedence over `answers`.
    pub preferences: Option<UserPreferences>,
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
    #[serde(rename = "selectedIP")]
    pub selected_ip: Option<String>,
}

/// POST /api/match
///
/// Body: `{"path": "vibes", "preferences": {...}}` or
/// `{"path": "pop_culture", "answers": [...], "selectedIP": "fallout"}`.
pub async fn match_decks(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<Value>, AppError> {
    let path = req.path;
    let prefs = match req.preferences {
        Some(prefs) => prefs,
        None => UserPreferences::from_answers(path, &req.answers, req.selected_ip.as_deref()),
    };

    let matches = state.finder.find_matches(prefs.clone(), path).await?;
    let count = matches.len();
    Ok(Json(json!({
        "data": matches,
        "count": count,
        "preferences": prefs,
    })))
}

#[derive(Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// POST /api/parse
///
/// Tokenize free text the way the matcher does.
pub async fn parse_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<Value>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::bad_request("text must not be empty"));
    }
    let parsed = state.finder.run(move |f| Ok(f.parse(&req.text))).await?;
    Ok(Json(json!({ "data": parsed })))
}
