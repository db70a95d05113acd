mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    info!(data_dir = %config.data_dir.display(), "Initializing precon finder...");
    let mut builder = precon_finder::AsyncPreconFinder::builder()
        .data_dir(&config.data_dir)
        .offline(true)
        .llm_api_key(config.llm_api_key.clone());
    if let Some(path) = &config.saved_decks_path {
        builder = builder.saved_decks_path(path);
    }
    if let Some(url) = &config.llm_gateway_url {
        builder = builder.llm_gateway_url(url);
    }
    if let Some(model) = &config.llm_model {
        builder = builder.llm_model(model);
    }
    let finder = match builder.build().await {
        Ok(finder) => finder,
        Err(e) => {
            error!("Failed to initialize precon finder: {e}");
            std::process::exit(1);
        }
    };
    info!("Finder ready.");

    let state = Arc::new(AppState { finder });

    let app = Router::new()
        .route("/api/decks", get(routes::decks::list_decks))
        .route("/api/decks/{id}", get(routes::decks::get_deck))
        .route("/api/decks/{id}/decklist", get(routes::decks::get_decklist))
        .route("/api/franchises", get(routes::decks::list_franchises))
        .route("/api/card-sets", get(routes::card_sets::list_card_sets))
        .route("/api/card-sets/{id}", get(routes::card_sets::get_card_set))
        .route("/api/match", post(routes::matching::match_decks))
        .route("/api/parse", post(routes::matching::parse_text))
        .route(
            "/api/saved",
            get(routes::saved::list_saved).delete(routes::saved::clear_saved),
        )
        .route(
            "/api/saved/{id}",
            post(routes::saved::toggle_saved).delete(routes::saved::remove_saved),
        )
        .route(
            "/functions/generate-deck-intros",
            post(routes::functions::generate_deck_intros),
        )
        .route(
            "/functions/generate-loading-interpretation",
            post(routes::functions::generate_loading_interpretation),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    info!("Listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
    }
}
