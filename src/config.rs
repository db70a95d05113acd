use std::collections::HashMap;
use std::path::PathBuf;

pub const SCRYFALL_API: &str = "https://api.scryfall.com";
pub const SCRYFALL_SITE: &str = "https://scryfall.com";
pub const TCGPLAYER_SEARCH: &str = "https://www.tcgplayer.com/search/magic/product";

pub const LLM_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const LLM_MODEL: &str = "google/gemini-2.5-flash";

/// Franchise value carried by decks that are not crossover products.
pub const BASE_GAME_IP: &str = "magic_original";

/// Maximum number of matches returned by the matcher.
pub const MAX_RESULTS: usize = 15;

pub fn catalog_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("decks", "precons-data.json"),
        ("card_sets", "card-sets.json"),
    ])
}

/// Subdirectory of the data directory holding one `Decklist` JSON per precon.
pub const DECKLIST_DIR: &str = "decklists";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("precon-finder")
    } else {
        PathBuf::from(".precon-finder")
    }
}

/// File name of the saved-decks store inside the data directory.
pub const SAVED_DECKS_FILE: &str = "saved-decks.json";

pub fn default_saved_decks_path() -> PathBuf {
    default_data_dir().join(SAVED_DECKS_FILE)
}
