//! Shared test fixtures for the precon finder integration tests.
//!
//! Provides a small in-memory catalog (decks, card sets, one decklist) and
//! helpers that write it to a temporary data directory.

#![allow(dead_code)]

use precon_finder::{Catalog, CardSet, Deck, Decklist, PreconFinder};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Build a `PreconFinder` over the sample catalog with its saved-decks file
/// in a temporary directory.
///
/// Returns `(PreconFinder, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test.
pub fn sample_finder() -> (PreconFinder, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let finder = PreconFinder::builder()
        .catalog(sample_catalog())
        .saved_decks_path(tmp_dir.path().join("saved.json"))
        .offline(true)
        .build()
        .unwrap();
    (finder, tmp_dir)
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_parts(sample_decks(), sample_card_sets(), sample_decklists())
}

/// Write the sample catalog as plain JSON files into `dir`.
pub fn write_catalog(dir: &Path) {
    fs::write(dir.join("precons-data.json"), deck_json().to_string()).unwrap();
    fs::write(dir.join("card-sets.json"), card_set_json().to_string()).unwrap();
    let decklists = dir.join("decklists");
    fs::create_dir_all(&decklists).unwrap();
    fs::write(
        decklists.join("cute-squirrels.json"),
        decklist_json().to_string(),
    )
    .unwrap();
}

pub fn sample_decks() -> Vec<Deck> {
    serde_json::from_value(deck_json()).unwrap()
}

pub fn sample_card_sets() -> Vec<CardSet> {
    serde_json::from_value(card_set_json()).unwrap()
}

pub fn sample_decklists() -> Vec<Decklist> {
    vec![serde_json::from_value(decklist_json()).unwrap()]
}

/// A deck with only the fields the matcher reads, for one-off tests.
pub fn bare_deck(id: &str, year: u16, tags: Value) -> Deck {
    serde_json::from_value(json!({
        "id": id,
        "name": id,
        "commander": format!("{id} commander"),
        "colors": [],
        "year": year,
        "set": "Test Set",
        "tags": tags,
    }))
    .unwrap()
}

pub fn deck_json() -> Value {
    json!([
        {
            "id": "cute-squirrels",
            "name": "Squirreled Away",
            "commander": "Hazel of the Rootbloom",
            "colors": ["B", "G"],
            "color_identity": "Golgari",
            "year": 2024,
            "set": "Bloomburrow Commander",
            "ip": "magic_original",
            "tags": {
                "themes": { "primary": ["food"], "secondary": ["sacrifice"] },
                "archetype": { "primary": ["aristocrats"], "secondary": [] },
                "creature_types": { "primary": ["squirrel"], "secondary": ["rat"] },
                "aesthetic_vibe": { "primary": ["cute"], "secondary": ["whimsical"] },
                "power_level": 6,
                "complexity": "moderate"
            },
            "cards": [
                {
                    "name": "Hazel of the Rootbloom",
                    "is_commander": true,
                    "image_url": "https://cards.scryfall.io/normal/front/hazel.jpg"
                },
                { "name": "Chatterfang, Squirrel General", "is_commander": false }
            ]
        },
        {
            "id": "cozy-critters",
            "name": "Family Matters",
            "commander": "Zinnia, Valley's Voice",
            "colors": ["W"],
            "year": 2024,
            "set": "Bloomburrow Commander",
            "tags": {
                "creature_types": { "primary": ["rabbits", "bird"], "secondary": [] },
                "aesthetic_vibe": { "primary": [], "secondary": ["cuddly"] },
                "power_level": 7
            },
            "cards": [
                { "name": "Zinnia, Valley's Voice", "is_commander": true, "image_url": "https://via.placeholder.com/250" }
            ]
        },
        {
            "id": "spooky-undead",
            "name": "Undead Unleashed",
            "commander": "Wilhelt, the Rotcleaver",
            "colors": ["U", "B"],
            "year": 2021,
            "set": "Innistrad: Midnight Hunt Commander",
            "ip": "magic_original",
            "tags": {
                "themes": { "primary": ["graveyard"], "secondary": [] },
                "archetype": { "primary": ["aggressive"], "secondary": [] },
                "creature_types": { "primary": ["zombie"], "secondary": ["spirit"] },
                "aesthetic_vibe": { "primary": ["creepy"], "secondary": ["spooky"] },
                "power_level": 8,
                "complexity": "high"
            },
            "cards": []
        },
        {
            "id": "wasteland-dogs",
            "name": "Scrappy Survivors",
            "commander": "Dogmeat, Ever Loyal",
            "colors": ["R", "G", "W"],
            "year": 2024,
            "set": "Fallout",
            "ip": "fallout",
            "tags": {
                "themes": { "primary": ["equipment"], "secondary": [] },
                "archetype": { "primary": ["voltron"], "secondary": [] },
                "creature_types": { "primary": ["dog"], "secondary": [] },
                "aesthetic_vibe": { "primary": ["chaotic"], "secondary": [] },
                "ip_meta_tags": ["wasteland"],
                "power_level": 6
            },
            "cards": []
        },
        {
            "id": "mutant-menace",
            "name": "Mutant Menace",
            "commander": "The Wise Mothman",
            "colors": ["B", "G", "U"],
            "year": 2024,
            "set": "Fallout",
            "ip": "fallout",
            "tags": {
                "themes": { "primary": ["counters"], "secondary": [] },
                "creature_types": { "primary": ["mutant"], "secondary": ["insect"] },
                "aesthetic_vibe": { "primary": ["creepy"], "secondary": [] },
                "power_level": 9
            },
            "cards": []
        },
        {
            "id": "dragon-twin-a",
            "name": "Draconic Dissent",
            "commander": "Lathliss, Dragon Queen",
            "colors": ["R"],
            "year": 2022,
            "set": "Commander Legends: Battle for Baldur's Gate",
            "tags": {
                "creature_types": { "primary": ["dragon"], "secondary": [] },
                "aesthetic_vibe": { "primary": ["epic"], "secondary": [] },
                "power_level": 7
            },
            "cards": []
        },
        {
            "id": "dragon-twin-b",
            "name": "Draconic Destruction",
            "commander": "Tiamat",
            "colors": ["W", "U", "B", "R", "G"],
            "year": 2018,
            "set": "Commander 2017",
            "tags": {
                "creature_types": { "primary": ["dragons"], "secondary": [] },
                "aesthetic_vibe": { "primary": ["heroic"], "secondary": [] },
                "power_level": 7
            },
            "cards": []
        }
    ])
}

pub fn card_set_json() -> Value {
    json!([
        {
            "id": "vault-boy",
            "name": "Secret Lair x Fallout: Vault Boy",
            "franchise": "fallout",
            "year": 2024,
            "tier": 2,
            "cards": ["Crop Rotation", "Vandalblast"],
            "imageUrl": "https://example.com/vault-boy.jpg",
            "themeIds": []
        },
        {
            "id": "spooky-season",
            "name": "Spooky Season",
            "franchise": "magic_original",
            "year": 2022,
            "tier": 1,
            "cards": ["Gravecrawler"],
            "imageUrl": "https://example.com/spooky.jpg",
            "themeIds": ["Graveyard"]
        },
        {
            "id": "old-school",
            "name": "Old School Lands",
            "franchise": "Godzilla",
            "year": 2020,
            "tier": 3,
            "cards": [],
            "imageUrl": "https://example.com/old.jpg"
        }
    ])
}

pub fn decklist_json() -> Value {
    json!({
        "preconId": "cute-squirrels",
        "highlightCards": [
            {
                "name": "Chatterfang, Squirrel General",
                "cardType": "creature",
                "whyItsCool": "Doubles your tokens with a squirrel on the side."
            }
        ],
        "fullDecklist": {
            "commander": ["Hazel of the Rootbloom"],
            "creatures": ["Chatterfang, Squirrel General", "Camellia, the Seedmiser"],
            "instantsSorceries": ["Beast Within"],
            "artifactsEnchantments": ["Sol Ring"],
            "lands": ["Command Tower", "Forest", "Swamp"]
        }
    })
}
