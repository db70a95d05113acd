//! Art-style quiz path.
//!
//! Independent of the tag matcher: each style maps to a set/franchise/tag
//! filter with OR semantics and no scoring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinderError;
use crate::models::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtStyle {
    ClassicFantasy,
    CuteCozy,
    ScifiFranchises,
    HorrorDark,
    DinosaursBeasts,
    EpicFantasy,
}

/// What a style selects. A deck passes if ANY non-empty criterion matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtStyleFilter {
    /// Substrings of the deck's set name.
    pub sets: &'static [&'static str],
    /// Exact franchise ids.
    pub ips: &'static [&'static str],
    /// Case-insensitive substrings of any tag value.
    pub tags: &'static [&'static str],
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 6] = [
        ArtStyle::ClassicFantasy,
        ArtStyle::CuteCozy,
        ArtStyle::ScifiFranchises,
        ArtStyle::HorrorDark,
        ArtStyle::DinosaursBeasts,
        ArtStyle::EpicFantasy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ArtStyle::ClassicFantasy => "classic-fantasy",
            ArtStyle::CuteCozy => "cute-cozy",
            ArtStyle::ScifiFranchises => "scifi-franchises",
            ArtStyle::HorrorDark => "horror-dark",
            ArtStyle::DinosaursBeasts => "dinosaurs-beasts",
            ArtStyle::EpicFantasy => "epic-fantasy",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ArtStyle::ClassicFantasy => "Classic Fantasy",
            ArtStyle::CuteCozy => "Cute & Cozy",
            ArtStyle::ScifiFranchises => "Sci-Fi & Franchises",
            ArtStyle::HorrorDark => "Horror & Dark",
            ArtStyle::DinosaursBeasts => "Dinosaurs & Beasts",
            ArtStyle::EpicFantasy => "Epic Fantasy",
        }
    }

    pub fn filter(self) -> ArtStyleFilter {
        match self {
            ArtStyle::ClassicFantasy => ArtStyleFilter {
                tags: &["dragon", "wizard", "elf", "angel", "knight"],
                ..Default::default()
            },
            ArtStyle::CuteCozy => ArtStyleFilter {
                sets: &["Bloomburrow"],
                tags: &["cute", "whimsical", "playful", "mouse", "badger", "otter", "squirrel"],
                ..Default::default()
            },
            ArtStyle::ScifiFranchises => ArtStyleFilter {
                ips: &["fallout", "doctor_who", "transformers", "warhammer_40k"],
                ..Default::default()
            },
            ArtStyle::HorrorDark => ArtStyleFilter {
                ips: &["walking_dead"],
                tags: &["vampire", "zombie", "horror", "dark", "werewolf"],
                ..Default::default()
            },
            ArtStyle::DinosaursBeasts => ArtStyleFilter {
                ips: &["jurassic_world"],
                tags: &["dinosaur", "beast", "tyranid", "primal"],
                ..Default::default()
            },
            ArtStyle::EpicFantasy => ArtStyleFilter {
                ips: &["lord_of_the_rings", "warhammer_40k"],
                ..Default::default()
            },
        }
    }

    pub fn matches(self, deck: &Deck) -> bool {
        let filter = self.filter();

        if filter.sets.iter().any(|s| deck.set.contains(s)) {
            return true;
        }
        if filter.ips.contains(&deck.ip.as_str()) {
            return true;
        }
        let values: Vec<String> = deck
            .tags
            .all_values()
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        filter
            .tags
            .iter()
            .any(|tag| values.iter().any(|v| v.contains(tag)))
    }

    pub fn filter_decks(self, decks: &[Deck]) -> Vec<&Deck> {
        decks.iter().filter(|d| self.matches(d)).collect()
    }
}

impl FromStr for ArtStyle {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtStyle::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| FinderError::InvalidArgument(format!("Unknown art style: {}", s)))
    }
}

impl fmt::Display for ArtStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
