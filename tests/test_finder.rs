//! Tests for the `PreconFinder` facade.

mod common;

use precon_finder::flavor::DeckIntroRequest;
use precon_finder::{FinderError, PathType, PreconFinder, QuizAnswer, UserPreferences};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn exposes_catalog() {
    let (finder, _tmp) = common::sample_finder();
    assert_eq!(finder.decks().count(), 7);
    assert_eq!(finder.card_sets().count(), 3);
    assert_eq!(finder.catalog().decklists.len(), 1);
}

#[test]
fn display_summarizes_state() {
    let (finder, tmp) = common::sample_finder();
    finder.toggle_saved("spooky-undead").unwrap();

    let text = finder.to_string();
    assert!(text.starts_with("PreconFinder(decks=7, card_sets=3, decklists=1, saved=1, saved_path="));
    assert!(text.contains(&tmp.path().join("saved.json").display().to_string()));
}

#[test]
fn match_answers_derives_preferences() {
    let (finder, _tmp) = common::sample_finder();
    let answers = vec![
        QuizAnswer::single("vibe", "cute"),
        QuizAnswer::single("creature-types", "Squirrels (hoarding nuts and causing chaos)"),
    ];
    let results = finder.match_answers(PathType::Vibes, &answers, None);
    assert_eq!(results[0].deck.id, "cute-squirrels");
    assert_eq!(results[0].match_percentage, 100);
}

#[test]
fn pop_culture_selection_filters_franchise() {
    let (finder, _tmp) = common::sample_finder();
    let results = finder.match_answers(PathType::PopCulture, &[], Some("fallout"));
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|m| m.deck.ip == "fallout"));
}

#[test]
fn seeded_matches_repeat() {
    let (finder, _tmp) = common::sample_finder();
    let prefs = UserPreferences {
        vibe: Some("epic".into()),
        ..Default::default()
    };
    let ids = |seed| {
        finder
            .find_matches_with_rng(&prefs, PathType::Vibes, &mut StdRng::seed_from_u64(seed))
            .into_iter()
            .map(|m| m.deck.id)
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(7), ids(7));
}

#[test]
fn parse_delegates_to_parser() {
    let (finder, _tmp) = common::sample_finder();
    let parsed = finder.parse("spooky zombies");
    assert!(!parsed.is_empty());
}

#[test]
fn toggle_unknown_deck_is_not_found() {
    let (finder, _tmp) = common::sample_finder();
    let result = finder.toggle_saved("no-such-deck");
    assert!(matches!(result, Err(FinderError::NotFound(_))));
    assert!(finder.saved_ids().is_empty());
}

#[test]
fn saved_decks_follow_save_order() {
    let (finder, _tmp) = common::sample_finder();
    assert!(finder.toggle_saved("mutant-menace").unwrap());
    assert!(finder.toggle_saved("cute-squirrels").unwrap());

    let names: Vec<_> = finder.saved_decks().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(names, ["mutant-menace", "cute-squirrels"]);
    assert!(finder.is_saved("cute-squirrels"));

    assert!(!finder.toggle_saved("mutant-menace").unwrap());
    assert!(finder.remove_saved("cute-squirrels").unwrap());
    assert!(finder.saved_decks().is_empty());
}

#[test]
fn clear_saved_empties_store() {
    let (finder, _tmp) = common::sample_finder();
    finder.toggle_saved("wasteland-dogs").unwrap();
    finder.clear_saved().unwrap();
    assert!(finder.saved_ids().is_empty());
}

#[test]
fn builds_from_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_catalog(tmp.path());

    let finder = PreconFinder::builder()
        .data_dir(tmp.path())
        .offline(true)
        .build()
        .unwrap();
    assert_eq!(finder.decks().count(), 7);

    finder.toggle_saved("cute-squirrels").unwrap();
    assert!(tmp.path().join("saved-decks.json").exists());

    // a second finder over the same directory sees the saved deck
    finder.close();
    let reopened = PreconFinder::builder()
        .data_dir(tmp.path())
        .offline(true)
        .build()
        .unwrap();
    assert!(reopened.is_saved("cute-squirrels"));
}

#[test]
fn flavor_without_key_is_config_error() {
    let (finder, _tmp) = common::sample_finder();
    assert!(!finder.flavor_enabled());

    let prefs = UserPreferences::default();
    let matches = finder.find_matches(&prefs, PathType::Vibes);
    let request = DeckIntroRequest::from_matches(&matches, &prefs, PathType::Vibes);
    assert!(matches!(finder.deck_intros(&request), Err(FinderError::Config(_))));
    assert!(matches!(finder.interpretation("cats"), Err(FinderError::Config(_))));
}

#[test]
fn validate_reports_sample_gaps() {
    let (finder, _tmp) = common::sample_finder();
    let report = finder.validate();
    assert!(report.has_errors());
    assert!(report.warnings().count() > 0);
}

#[test]
fn builder_overrides_flavor_model() {
    let (finder, _tmp) = common::sample_finder();
    assert_eq!(finder.flavor_model(), precon_finder::config::LLM_MODEL);

    let tmp = tempfile::tempdir().unwrap();
    let finder = PreconFinder::builder()
        .catalog(common::sample_catalog())
        .saved_decks_path(tmp.path().join("saved.json"))
        .llm_model("tiny-model")
        .llm_gateway_url("http://localhost:8080/v1/chat/completions")
        .build()
        .unwrap();
    assert_eq!(finder.flavor_model(), "tiny-model");
    assert_eq!(finder.flavor_gateway_url(), "http://localhost:8080/v1/chat/completions");
}
