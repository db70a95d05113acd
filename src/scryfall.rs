//! Scryfall card-image and card-data helpers.
//!
//! URL builders are pure. The fetch methods on [`ScryfallClient`] are best
//! effort: a failed request is logged and reported as `None` (or an empty
//! list) so callers can fall back to a placeholder.

use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{SCRYFALL_API, SCRYFALL_SITE, TCGPLAYER_SEARCH};
use crate::models::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageSize {
    Small,
    #[default]
    Normal,
    Large,
    Png,
    ArtCrop,
    BorderCrop,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Normal => "normal",
            ImageSize::Large => "large",
            ImageSize::Png => "png",
            ImageSize::ArtCrop => "art_crop",
            ImageSize::BorderCrop => "border_crop",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CardPrices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub eur: Option<String>,
}

/// The subset of a Scryfall card object this crate reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScryfallCard {
    pub id: String,
    pub name: String,
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: f64,
    pub colors: Option<Vec<String>>,
    pub color_identity: Option<Vec<String>>,
    pub image_uris: Option<ImageUris>,
    pub prices: Option<CardPrices>,
    pub scryfall_uri: String,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    data: Vec<ScryfallCard>,
}

fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.into(),
        Err(_) => base.to_string(),
    }
}

/// Direct image URL for a card by exact name, usable as an `<img src>`.
pub fn card_image_url(card_name: &str, size: ImageSize) -> String {
    with_query(
        &format!("{}/cards/named", SCRYFALL_API),
        &[
            ("exact", card_name),
            ("format", "image"),
            ("version", size.as_str()),
        ],
    )
}

/// Scryfall search page for an exact card name.
pub fn card_page_url(card_name: &str) -> String {
    let query = format!("!\"{}\"", card_name);
    with_query(&format!("{}/search", SCRYFALL_SITE), &[("q", &query)])
}

/// Marketplace search link for buying a deck.
pub fn tcgplayer_search_url(deck_name: &str) -> String {
    with_query(
        TCGPLAYER_SEARCH,
        &[("productLineName", "magic"), ("q", deck_name), ("view", "grid")],
    )
}

/// Whether a stored image URL is a stand-in rather than real card art.
pub fn is_placeholder_url(url: &str) -> bool {
    let url = url.trim();
    url.is_empty() || url.contains("placeholder") || url.contains("via.placeholder.com")
}

/// The best image for a deck's commander: the stored card image when it is
/// real, otherwise the Scryfall named-image URL.
pub fn commander_image_url(deck: &Deck) -> String {
    deck.commander_card()
        .and_then(|card| card.image_url.as_deref())
        .filter(|url| !is_placeholder_url(url))
        .map(str::to_string)
        .unwrap_or_else(|| card_image_url(&deck.commander, ImageSize::Normal))
}

// ---------------------------------------------------------------------------
// ScryfallClient
// ---------------------------------------------------------------------------

/// Blocking Scryfall API client with a lazily-built HTTP client.
pub struct ScryfallClient {
    base_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl ScryfallClient {
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(SCRYFALL_API, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: None,
        }
    }

    fn client(&mut self) -> Option<Client> {
        if self.client.is_none() {
            match Client::builder()
                .timeout(self.timeout)
                .user_agent(concat!("precon-finder/", env!("CARGO_PKG_VERSION")))
                .build()
            {
                Ok(client) => self.client = Some(client),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to build Scryfall HTTP client");
                    return None;
                }
            }
        }
        self.client.clone()
    }

    fn get<T: serde::de::DeserializeOwned>(&mut self, url: &str, what: &str) -> Option<T> {
        let client = self.client()?;
        let resp = match client.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "Scryfall request failed for {}", what);
                return None;
            }
        };
        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), "Scryfall has no result for {}", what);
            return None;
        }
        match resp.json::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "invalid Scryfall response for {}", what);
                None
            }
        }
    }

    /// Full card data by exact name, or `None` if not found or unreachable.
    pub fn fetch_card(&mut self, card_name: &str) -> Option<ScryfallCard> {
        let url = with_query(
            &format!("{}/cards/named", self.base_url),
            &[("exact", card_name)],
        );
        self.get(&url, card_name)
    }

    /// Full card data by Scryfall id.
    pub fn fetch_card_by_id(&mut self, scryfall_id: &str) -> Option<ScryfallCard> {
        let url = format!("{}/cards/{}", self.base_url, scryfall_id);
        self.get(&url, scryfall_id)
    }

    /// Cards in a set, optionally narrowed by extra Scryfall search syntax.
    pub fn search_set(&mut self, set_code: &str, query: &str) -> Vec<ScryfallCard> {
        let q = format!("set:{} {}", set_code, query);
        let url = with_query(
            &format!("{}/cards/search", self.base_url),
            &[("q", q.trim())],
        );
        self.get::<SearchPage>(&url, set_code)
            .map(|page| page.data)
            .unwrap_or_default()
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}
