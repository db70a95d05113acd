//! Card-set queries, including cross-links from a set to related decks.

use crate::catalog::Catalog;
use crate::models::{Availability, CardSet, Deck};

/// Query interface for collector card sets.
pub struct CardSetQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> CardSetQuery<'a> {
    /// Create a new `CardSetQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn list(&self) -> &'a [CardSet] {
        &self.catalog.card_sets
    }

    pub fn count(&self) -> usize {
        self.catalog.card_sets.len()
    }

    pub fn get(&self, id: &str) -> Option<&'a CardSet> {
        self.catalog.card_sets.iter().find(|s| s.id == id)
    }

    pub fn by_tier(&self, tier: Availability) -> Vec<&'a CardSet> {
        self.catalog
            .card_sets
            .iter()
            .filter(|s| s.tier == tier)
            .collect()
    }

    /// Card sets for a franchise (case-insensitive).
    pub fn by_franchise(&self, franchise: &str) -> Vec<&'a CardSet> {
        self.catalog
            .card_sets
            .iter()
            .filter(|s| s.franchise.eq_ignore_ascii_case(franchise))
            .collect()
    }

    /// Decks sharing the set's franchise or carrying one of its theme ids as
    /// a theme tag.
    pub fn related_decks(&self, set: &CardSet) -> Vec<&'a Deck> {
        let theme_ids: Vec<String> = set.theme_ids.iter().map(|t| t.to_lowercase()).collect();
        self.catalog
            .decks
            .iter()
            .filter(|deck| {
                deck.ip.eq_ignore_ascii_case(&set.franchise)
                    || deck
                        .tags
                        .themes
                        .iter()
                        .any(|t| theme_ids.contains(&t.to_lowercase()))
            })
            .collect()
    }
}
