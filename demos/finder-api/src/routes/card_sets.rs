use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use precon_finder::models::Availability;
use precon_finder::{CardSet, Deck, FinderError};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListCardSetsParams {
    /// 1 = in print, 2 = limited, 3 = secondary market only.
    pub tier: Option<u8>,
}

/// GET /api/card-sets?tier=1
pub async fn list_card_sets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCardSetsParams>,
) -> Result<Json<Value>, AppError> {
    let tier = params
        .tier
        .map(Availability::try_from)
        .transpose()
        .map_err(AppError::bad_request)?;

    let sets: Vec<CardSet> = state
        .finder
        .run(move |f| {
            let query = f.card_sets();
            Ok(match tier {
                Some(tier) => query.by_tier(tier).into_iter().cloned().collect(),
                None => query.list().to_vec(),
            })
        })
        .await?;

    let count = sets.len();
    Ok(Json(json!({ "data": sets, "count": count })))
}

/// GET /api/card-sets/{id}
///
/// A card set plus the decks that share its franchise or themes.
pub async fn get_card_set(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let (set, related): (CardSet, Vec<Deck>) = state
        .finder
        .run(move |f| {
            let query = f.card_sets();
            let set = query
                .get(&id)
                .ok_or_else(|| FinderError::NotFound(format!("No card set with id '{id}'")))?;
            let related = query.related_decks(set).into_iter().cloned().collect();
            Ok((set.clone(), related))
        })
        .await?;

    Ok(Json(json!({ "data": set, "relatedDecks": related })))
}
