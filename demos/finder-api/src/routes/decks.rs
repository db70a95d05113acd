use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use precon_finder::queries::BrowseFilter;
use precon_finder::quiz::questions::FRANCHISE_OPTIONS;
use precon_finder::scryfall::{commander_image_url, tcgplayer_search_url};
use precon_finder::{Color, Deck, FinderError};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListDecksParams {
    pub search: Option<String>,
    /// Color symbols, e.g. `WU`.
    pub colors: Option<String>,
}

/// GET /api/decks?search=squirrel&colors=BG
///
/// Browse decks by search term and/or colors (a deck passes if it has any
/// of the given colors).
pub async fn list_decks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListDecksParams>,
) -> Result<Json<Value>, AppError> {
    let filter = BrowseFilter {
        search: params.search,
        colors: params
            .colors
            .as_deref()
            .map(Color::parse_symbols)
            .unwrap_or_default(),
    };
    let decks: Vec<Deck> = state
        .finder
        .run(move |f| Ok(f.decks().browse(&filter).into_iter().cloned().collect()))
        .await?;

    let count = decks.len();
    Ok(Json(json!({ "data": decks, "count": count })))
}

/// GET /api/decks/{id}
///
/// A single deck with its commander image, purchase link and saved state.
pub async fn get_deck(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let (deck, saved, has_decklist) = state
        .finder
        .run(move |f| {
            let deck = f
                .decks()
                .get(&id)
                .cloned()
                .ok_or_else(|| FinderError::NotFound(format!("No deck with id '{id}'")))?;
            Ok((deck, f.is_saved(&id), f.decks().has_decklist(&id)))
        })
        .await?;

    Ok(Json(json!({
        "data": {
            "commanderImageUrl": commander_image_url(&deck),
            "tcgplayerUrl": tcgplayer_search_url(&deck.name),
            "saved": saved,
            "hasDecklist": has_decklist,
            "deck": deck,
        }
    })))
}

/// GET /api/decks/{id}/decklist
pub async fn get_decklist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let decklist = state
        .finder
        .run(move |f| Ok(f.decks().decklist(&id).cloned()))
        .await?
        .ok_or_else(|| AppError::not_found("No decklist curated for this deck"))?;

    let counts = decklist.counts();
    Ok(Json(json!({ "data": decklist, "counts": counts })))
}

/// GET /api/franchises
///
/// The pop-culture quiz options with how many decks each one has.
pub async fn list_franchises(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let counts = state
        .finder
        .run(|f| Ok(f.decks().franchise_counts()))
        .await?;

    let data: Vec<Value> = FRANCHISE_OPTIONS
        .iter()
        .map(|option| {
            json!({
                "id": option.id,
                "name": option.name,
                "tagline": option.tagline,
                "deckCount": counts.get(option.id).copied().unwrap_or(0),
            })
        })
        .collect();
    Ok(Json(json!({ "data": data })))
}
