//! Art-style filter tests.

mod common;

use precon_finder::queries::ArtStyle;
use serde_json::json;

fn ids(style: ArtStyle) -> Vec<String> {
    let decks = common::sample_decks();
    style
        .filter_decks(&decks)
        .into_iter()
        .map(|d| d.id.clone())
        .collect()
}

#[test]
fn cute_cozy_matches_set_name() {
    assert_eq!(ids(ArtStyle::CuteCozy), vec!["cute-squirrels", "cozy-critters"]);
}

#[test]
fn scifi_matches_franchise() {
    assert_eq!(ids(ArtStyle::ScifiFranchises), vec!["wasteland-dogs", "mutant-menace"]);
}

#[test]
fn tag_substrings_match_any_category() {
    // "dragons" contains "dragon"
    assert_eq!(ids(ArtStyle::ClassicFantasy), vec!["dragon-twin-a", "dragon-twin-b"]);
    assert_eq!(ids(ArtStyle::HorrorDark), vec!["spooky-undead"]);
}

#[test]
fn no_match_is_empty() {
    assert!(ids(ArtStyle::DinosaursBeasts).is_empty());
}

#[test]
fn tag_match_ignores_case() {
    let deck = common::bare_deck(
        "dinos",
        2023,
        json!({ "creature_types": { "primary": ["Dinosaur"] } }),
    );
    assert!(ArtStyle::DinosaursBeasts.matches(&deck));
    assert!(!ArtStyle::CuteCozy.matches(&deck));
}

#[test]
fn ids_round_trip_through_from_str() {
    for style in ArtStyle::ALL {
        assert_eq!(style.id().parse::<ArtStyle>().unwrap(), style);
    }
    assert!("pastel".parse::<ArtStyle>().is_err());
    assert_eq!(ArtStyle::CuteCozy.to_string(), "Cute & Cozy");
    assert_eq!(
        serde_json::to_string(&ArtStyle::HorrorDark).unwrap(),
        "\"horror-dark\""
    );
}
