//! Deck browse, search and filter queries over the loaded catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{Color, Deck, DeckCard, Decklist};

use super::art::ArtStyle;

/// Filters for the browse page. Both filters must pass; either may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseFilter {
    /// Case-insensitive substring over every searchable deck field.
    pub search: Option<String>,
    /// A deck passes if it contains ANY of these colors.
    #[serde(default)]
    pub colors: Vec<Color>,
}

// ---------------------------------------------------------------------------
// DeckQuery
// ---------------------------------------------------------------------------

/// Query interface for precon decks.
pub struct DeckQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> DeckQuery<'a> {
    /// Create a new `DeckQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// All decks, in catalog order.
    pub fn list(&self) -> &'a [Deck] {
        &self.catalog.decks
    }

    pub fn count(&self) -> usize {
        self.catalog.decks.len()
    }

    pub fn get(&self, id: &str) -> Option<&'a Deck> {
        self.catalog.decks.iter().find(|d| d.id == id)
    }

    /// Decks whose searchable text contains `term` (case-insensitive).
    ///
    /// A blank term matches every deck.
    pub fn search(&self, term: &str) -> Vec<&'a Deck> {
        let needle = term.trim().to_lowercase();
        self.catalog
            .decks
            .iter()
            .filter(|d| needle.is_empty() || d.searchable_text().contains(&needle))
            .collect()
    }

    /// Apply the browse page filters.
    pub fn browse(&self, filter: &BrowseFilter) -> Vec<&'a Deck> {
        let needle = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        self.catalog
            .decks
            .iter()
            .filter(|d| {
                let matches_search = needle.is_empty() || d.searchable_text().contains(&needle);
                let matches_color =
                    filter.colors.is_empty() || filter.colors.iter().any(|c| d.colors.contains(c));
                matches_search && matches_color
            })
            .collect()
    }

    /// Decks themed around a franchise (exact `ip` match).
    pub fn by_franchise(&self, ip: &str) -> Vec<&'a Deck> {
        self.catalog.decks.iter().filter(|d| d.ip == ip).collect()
    }

    /// Number of decks per franchise.
    pub fn franchise_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for deck in &self.catalog.decks {
            *counts.entry(deck.ip.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Decks carrying `theme` as a primary or secondary theme tag.
    pub fn by_theme(&self, theme: &str) -> Vec<&'a Deck> {
        let theme = theme.trim().to_lowercase();
        self.catalog
            .decks
            .iter()
            .filter(|d| d.tags.themes.iter().any(|t| t.to_lowercase() == theme))
            .collect()
    }

    /// Number of decks per theme tag (lower-cased), counting each deck once
    /// per theme.
    pub fn theme_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for deck in &self.catalog.decks {
            let mut seen: Vec<String> = Vec::new();
            for theme in deck.tags.themes.iter() {
                let theme = theme.to_lowercase();
                if !seen.contains(&theme) {
                    *counts.entry(theme.clone()).or_insert(0) += 1;
                    seen.push(theme);
                }
            }
        }
        counts
    }

    /// Decks for the art-style quiz path.
    pub fn by_art_style(&self, style: ArtStyle) -> Vec<&'a Deck> {
        style.filter_decks(&self.catalog.decks)
    }

    /// The commander card of a deck, if its card list flags one.
    pub fn commander_card(&self, deck: &'a Deck) -> Option<&'a DeckCard> {
        deck.commander_card()
    }

    /// The full decklist for a precon, if one has been curated.
    pub fn decklist(&self, id: &str) -> Option<&'a Decklist> {
        self.catalog.decklists.get(id)
    }

    pub fn has_decklist(&self, id: &str) -> bool {
        self.catalog.decklists.contains_key(id)
    }
}
