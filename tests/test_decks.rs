//! Deck query integration tests against the sample catalog.

mod common;

use precon_finder::models::Color;
use precon_finder::queries::{ArtStyle, BrowseFilter, DeckQuery};

// ---------------------------------------------------------------------------
// get / list
// ---------------------------------------------------------------------------

#[test]
fn get_by_id_finds_deck() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    let deck = dq.get("cute-squirrels").unwrap();
    assert_eq!(deck.name, "Squirreled Away");
    assert_eq!(deck.colors, vec![Color::Black, Color::Green]);
    assert!(dq.get("no-such-deck").is_none());
}

#[test]
fn list_keeps_catalog_order() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    assert_eq!(dq.count(), 7);
    assert_eq!(dq.list()[0].id, "cute-squirrels");
}

#[test]
fn missing_ip_defaults_to_base_game() {
    let catalog = common::sample_catalog();
    let deck = DeckQuery::new(&catalog).get("cozy-critters").unwrap();
    assert_eq!(deck.ip, "magic_original");
    assert!(deck.is_base_game());
}

// ---------------------------------------------------------------------------
// search / browse
// ---------------------------------------------------------------------------

#[test]
fn search_matches_name_and_tags() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    let results = dq.search("squirrel");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "cute-squirrels");
}

#[test]
fn search_is_case_insensitive() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    assert_eq!(dq.search("FALLOUT").len(), 2);
    assert_eq!(dq.search("wilhelt").len(), 1);
}

#[test]
fn blank_search_returns_everything() {
    let catalog = common::sample_catalog();
    assert_eq!(DeckQuery::new(&catalog).search("   ").len(), 7);
}

#[test]
fn browse_colors_match_any() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    let filter = BrowseFilter {
        colors: vec![Color::White],
        ..Default::default()
    };
    let ids: Vec<&str> = dq.browse(&filter).iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["cozy-critters", "wasteland-dogs", "dragon-twin-b"]);
}

#[test]
fn browse_combines_search_and_colors() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    let filter = BrowseFilter {
        search: Some("draconic".into()),
        colors: vec![Color::Red],
    };
    assert_eq!(dq.browse(&filter).len(), 2);

    let filter = BrowseFilter {
        search: Some("draconic".into()),
        colors: Color::parse_symbols("W"),
    };
    let results = dq.browse(&filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "dragon-twin-b");
}

#[test]
fn empty_browse_filter_returns_everything() {
    let catalog = common::sample_catalog();
    assert_eq!(DeckQuery::new(&catalog).browse(&BrowseFilter::default()).len(), 7);
}

// ---------------------------------------------------------------------------
// franchise / theme
// ---------------------------------------------------------------------------

#[test]
fn by_franchise_and_counts() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    assert_eq!(dq.by_franchise("fallout").len(), 2);
    let counts = dq.franchise_counts();
    assert_eq!(counts.get("magic_original"), Some(&5));
    assert_eq!(counts.get("fallout"), Some(&2));
}

#[test]
fn by_theme_is_case_insensitive() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    let results = dq.by_theme("Graveyard");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "spooky-undead");
    assert_eq!(dq.theme_counts().get("food"), Some(&1));
}

// ---------------------------------------------------------------------------
// commander / decklist
// ---------------------------------------------------------------------------

#[test]
fn commander_card_is_flagged_card() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    let deck = dq.get("cute-squirrels").unwrap();
    assert_eq!(dq.commander_card(deck).unwrap().name, "Hazel of the Rootbloom");

    let deck = dq.get("spooky-undead").unwrap();
    assert!(dq.commander_card(deck).is_none());
}

#[test]
fn decklist_counts_sections() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    assert!(dq.has_decklist("cute-squirrels"));
    assert!(!dq.has_decklist("spooky-undead"));

    let counts = dq.decklist("cute-squirrels").unwrap().counts();
    assert_eq!(counts.commander, 1);
    assert_eq!(counts.creatures, 2);
    assert_eq!(counts.planeswalkers, 0);
    assert_eq!(counts.lands, 3);
    assert_eq!(counts.total, 8);
}

#[test]
fn art_style_from_deck_query() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    assert_eq!(dq.by_art_style(ArtStyle::CuteCozy).len(), 2);
    assert_eq!(dq.by_art_style(ArtStyle::ScifiFranchises).len(), 2);
}
