//! Free-text parser tests.

use precon_finder::parser::parse_custom_input;

#[test]
fn rick_and_morty_meets_redwall() {
    let parsed = parse_custom_input("rick and morty meets redwall");
    assert_eq!(parsed.vibes, vec!["chaotic"]);
    assert_eq!(parsed.themes, vec!["sci-fi"]);
    assert!(parsed.ips.is_empty());
    assert_eq!(parsed.raw_text, "rick and morty meets redwall");
}

#[test]
fn fallout_wasteland_dedupes_franchise() {
    let parsed = parse_custom_input("fallout wasteland");
    assert_eq!(parsed.ips, vec!["fallout"]);
}

#[test]
fn keywords_map_to_canonical_tokens() {
    let parsed = parse_custom_input("Kitties, furbies, PUPPIES");
    assert!(parsed.creature_types.contains(&"cat".to_string()));
    assert!(parsed.creature_types.contains(&"dog".to_string()));
    assert!(parsed.creature_types.contains(&"small creatures".to_string()));
}

#[test]
fn vibe_keywords_deduplicate() {
    let parsed = parse_custom_input("spooky but dark and scary");
    assert_eq!(parsed.vibes, vec!["creepy"]);
}

#[test]
fn themes_and_franchises_together() {
    let parsed = parse_custom_input("doctor who with lots of tokens");
    assert_eq!(parsed.ips, vec!["doctor_who"]);
    assert!(parsed.themes.contains(&"tokens".to_string()));
}

#[test]
fn nothing_recognized_is_empty() {
    let parsed = parse_custom_input("xyzzy");
    assert!(parsed.is_empty());
    assert_eq!(parsed.raw_text, "xyzzy");
}

#[test]
fn empty_text_is_empty() {
    assert!(parse_custom_input("").is_empty());
}
