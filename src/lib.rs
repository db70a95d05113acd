//! Precon Finder.
//!
//! Catalog and recommendation engine for Magic: The Gathering preconstructed
//! Commander decks. Deck, card-set and decklist data is loaded once from JSON
//! files (optionally downloaded and gzip-compressed) and queried in memory.
//! Quiz answers or free text are scored against every deck's tags to produce
//! a ranked list of matches.
//!
//! # Quick start
//!
//! ```no_run
//! use precon_finder::{PathType, PreconFinder, UserPreferences};
//!
//! let finder = PreconFinder::builder().data_dir("data").offline(true).build().unwrap();
//!
//! let prefs = UserPreferences {
//!     vibe: Some("cute".into()),
//!     creature_types: vec!["squirrel".into()],
//!     ..Default::default()
//! };
//! for m in finder.find_matches(&prefs, PathType::Vibes) {
//!     println!("{} ({}%)", m.deck.name, m.match_percentage);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flavor;
pub mod matcher;
pub mod models;
pub mod parser;
pub mod queries;
pub mod quiz;
pub mod saved;
pub mod scryfall;
pub mod synonyms;
pub mod validate;

#[cfg(feature = "async")]
pub use async_client::AsyncPreconFinder;
pub use catalog::{Catalog, CatalogStore};
pub use error::{FinderError, Result};
pub use matcher::MatchResult;
pub use models::{CardSet, Color, Deck, Decklist};
pub use parser::ParsedCustomInput;
pub use quiz::{PathType, QuizAnswer, UserPreferences};
pub use saved::SavedDecks;

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;

use flavor::{DeckIntroRequest, FlavorClient};
use scryfall::{ScryfallCard, ScryfallClient};
use validate::ValidationReport;

// ---------------------------------------------------------------------------
// PreconFinderBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PreconFinder`].
///
/// Use [`PreconFinder::builder()`] to obtain one.
pub struct PreconFinderBuilder {
    data_dir: Option<PathBuf>,
    catalog_url: Option<String>,
    offline: bool,
    timeout: Duration,
    saved_decks_path: Option<PathBuf>,
    llm_api_key: Option<String>,
    llm_gateway_url: Option<String>,
    llm_model: Option<String>,
    catalog: Option<Catalog>,
}

impl Default for PreconFinderBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_url: None,
            offline: false,
            timeout: Duration::from_secs(30),
            saved_decks_path: None,
            llm_api_key: None,
            llm_gateway_url: None,
            llm_model: None,
            catalog: None,
        }
    }
}

impl PreconFinderBuilder {
    /// Directory holding `precons-data.json`, `card-sets.json` and the
    /// `decklists/` folder.
    ///
    /// Defaults to the platform data directory (e.g.
    /// `~/.local/share/precon-finder` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Base URL to download missing catalog files from.
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = Some(url.into());
        self
    }

    /// Never download catalog files. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// HTTP timeout for catalog downloads, Scryfall and the LLM gateway.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Where saved deck ids are persisted. Defaults to `saved-decks.json`
    /// in the data directory.
    pub fn saved_decks_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.saved_decks_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn llm_api_key(mut self, key: impl Into<String>) -> Self {
        self.llm_api_key = Some(key.into());
        self
    }

    pub fn llm_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.llm_gateway_url = Some(url.into());
        self
    }

    pub fn llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = Some(model.into());
        self
    }

    /// Use an already-loaded catalog instead of reading the data directory.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load the catalog and open the saved-decks store.
    pub fn build(self) -> Result<PreconFinder> {
        let (catalog, data_dir) = match self.catalog {
            Some(catalog) => (catalog, self.data_dir),
            None => {
                let mut store =
                    CatalogStore::new(self.data_dir, self.catalog_url, self.offline, self.timeout)?;
                let catalog = store.load_catalog()?;
                store.close();
                (catalog, Some(store.data_dir))
            }
        };

        let saved_path = match (self.saved_decks_path, data_dir) {
            (Some(path), _) => path,
            (None, Some(dir)) => dir.join(config::SAVED_DECKS_FILE),
            (None, None) => config::default_saved_decks_path(),
        };
        let saved = SavedDecks::open(saved_path)?;

        let mut flavor = FlavorClient::new(self.llm_api_key, self.timeout);
        if let Some(url) = self.llm_gateway_url {
            flavor = flavor.with_gateway_url(url);
        }
        if let Some(model) = self.llm_model {
            flavor = flavor.with_model(model);
        }

        tracing::info!(
            decks = catalog.decks.len(),
            card_sets = catalog.card_sets.len(),
            saved = saved.len(),
            "precon finder ready"
        );

        Ok(PreconFinder {
            catalog,
            saved: RefCell::new(saved),
            scryfall: RefCell::new(ScryfallClient::new(self.timeout)),
            flavor: RefCell::new(flavor),
        })
    }
}

// ---------------------------------------------------------------------------
// PreconFinder
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Owns the immutable catalog and exposes query interfaces as lightweight
/// borrowing wrappers. The saved-decks store and the HTTP clients sit behind
/// `RefCell`, so a `PreconFinder` is `Send` but not `Sync`; use
/// [`AsyncPreconFinder`] (feature `async`) to share one across tasks.
pub struct PreconFinder {
    catalog: Catalog,
    saved: RefCell<SavedDecks>,
    scryfall: RefCell<ScryfallClient>,
    flavor: RefCell<FlavorClient>,
}

impl PreconFinder {
    pub fn builder() -> PreconFinderBuilder {
        PreconFinderBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the deck query interface.
    pub fn decks(&self) -> queries::decks::DeckQuery<'_> {
        queries::decks::DeckQuery::new(&self.catalog)
    }

    /// Access the card-set query interface.
    pub fn card_sets(&self) -> queries::card_sets::CardSetQuery<'_> {
        queries::card_sets::CardSetQuery::new(&self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -- Matching ----------------------------------------------------------

    /// Rank every deck against `prefs`. See [`matcher::match_precons`].
    pub fn find_matches(&self, prefs: &UserPreferences, path: PathType) -> Vec<MatchResult> {
        matcher::match_precons(&self.catalog.decks, prefs, path)
    }

    /// Like [`find_matches`](Self::find_matches) with a caller-supplied RNG
    /// for the tie-breaker jitter.
    pub fn find_matches_with_rng<R: Rng>(
        &self,
        prefs: &UserPreferences,
        path: PathType,
        rng: &mut R,
    ) -> Vec<MatchResult> {
        matcher::match_precons_with_rng(&self.catalog.decks, prefs, path, rng)
    }

    /// Derive preferences from raw quiz answers, then rank decks.
    pub fn match_answers(
        &self,
        path: PathType,
        answers: &[QuizAnswer],
        selected_ip: Option<&str>,
    ) -> Vec<MatchResult> {
        let prefs = UserPreferences::from_answers(path, answers, selected_ip);
        self.find_matches(&prefs, path)
    }

    /// Tokenize free text into vibes, creature types, themes and franchises.
    pub fn parse(&self, text: &str) -> ParsedCustomInput {
        parser::parse_custom_input(text)
    }

    // -- Saved decks -------------------------------------------------------

    pub fn saved_ids(&self) -> Vec<String> {
        self.saved.borrow().ids().to_vec()
    }

    /// Saved decks present in the catalog, in the order they were saved.
    pub fn saved_decks(&self) -> Vec<&Deck> {
        let decks = self.decks();
        self.saved
            .borrow()
            .ids()
            .iter()
            .filter_map(|id| decks.get(id))
            .collect()
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.borrow().is_saved(id)
    }

    /// Save or unsave a deck. Returns whether it is saved afterwards.
    ///
    /// Fails with [`FinderError::NotFound`] for ids not in the catalog.
    pub fn toggle_saved(&self, id: &str) -> Result<bool> {
        if self.decks().get(id).is_none() {
            return Err(FinderError::NotFound(format!("Deck '{}' not found", id)));
        }
        self.saved.borrow_mut().toggle(id)
    }

    pub fn remove_saved(&self, id: &str) -> Result<bool> {
        self.saved.borrow_mut().remove(id)
    }

    pub fn clear_saved(&self) -> Result<()> {
        self.saved.borrow_mut().clear()
    }

    // -- External collaborators --------------------------------------------

    /// Look up a card on Scryfall. `None` if not found or unreachable.
    pub fn fetch_card(&self, name: &str) -> Option<ScryfallCard> {
        self.scryfall.borrow_mut().fetch_card(name)
    }

    /// Whether an LLM API key is configured.
    pub fn flavor_enabled(&self) -> bool {
        self.flavor.borrow().is_configured()
    }

    /// The chat model flavor requests are sent to.
    pub fn flavor_model(&self) -> String {
        self.flavor.borrow().model().to_string()
    }

    pub fn flavor_gateway_url(&self) -> String {
        self.flavor.borrow().gateway_url().to_string()
    }

    /// One intro line for each of the top matches.
    pub fn deck_intros(&self, request: &DeckIntroRequest) -> Result<Vec<String>> {
        self.flavor.borrow_mut().generate_deck_intros(request)
    }

    /// A short playful reading of a free-text search.
    pub fn interpretation(&self, custom_text: &str) -> Result<String> {
        self.flavor.borrow_mut().generate_interpretation(custom_text)
    }

    // -- Maintenance -------------------------------------------------------

    /// Check every quiz option against the loaded decks.
    pub fn validate(&self) -> ValidationReport {
        validate::validate_quiz_options(&self.catalog.decks)
    }

    /// Consume the finder and release HTTP clients.
    pub fn close(self) {
        self.scryfall.borrow_mut().close();
        self.flavor.borrow_mut().close();
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PreconFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saved = self.saved.borrow();
        write!(
            f,
            "PreconFinder(decks={}, card_sets={}, decklists={}, saved={}, saved_path={})",
            self.catalog.decks.len(),
            self.catalog.card_sets.len(),
            self.catalog.decklists.len(),
            saved.len(),
            saved.path().display()
        )
    }
}
