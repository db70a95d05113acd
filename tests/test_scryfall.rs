//! Scryfall URL helper tests. No network access.

mod common;

use precon_finder::queries::DeckQuery;
use precon_finder::scryfall::{
    card_image_url, card_page_url, commander_image_url, is_placeholder_url, tcgplayer_search_url,
    ImageSize,
};

#[test]
fn image_url_encodes_name_and_size() {
    assert_eq!(
        card_image_url("Sol Ring", ImageSize::Normal),
        "https://api.scryfall.com/cards/named?exact=Sol+Ring&format=image&version=normal"
    );
    let url = card_image_url("Zinnia, Valley's Voice", ImageSize::ArtCrop);
    assert!(url.contains("exact=Zinnia%2C+Valley%27s+Voice"));
    assert!(url.ends_with("version=art_crop"));
}

#[test]
fn page_url_uses_exact_search() {
    assert_eq!(
        card_page_url("Sol Ring"),
        "https://scryfall.com/search?q=%21%22Sol+Ring%22"
    );
}

#[test]
fn tcgplayer_link() {
    assert_eq!(
        tcgplayer_search_url("Squirreled Away"),
        "https://www.tcgplayer.com/search/magic/product?productLineName=magic&q=Squirreled+Away&view=grid"
    );
}

#[test]
fn placeholder_detection() {
    assert!(is_placeholder_url(""));
    assert!(is_placeholder_url("https://via.placeholder.com/250"));
    assert!(is_placeholder_url("/placeholder.svg"));
    assert!(!is_placeholder_url("https://cards.scryfall.io/normal/front/hazel.jpg"));
}

#[test]
fn commander_image_prefers_stored_art() {
    let catalog = common::sample_catalog();
    let dq = DeckQuery::new(&catalog);

    let stored = commander_image_url(dq.get("cute-squirrels").unwrap());
    assert_eq!(stored, "https://cards.scryfall.io/normal/front/hazel.jpg");

    // placeholder image falls back to the commander name lookup
    let fallback = commander_image_url(dq.get("cozy-critters").unwrap());
    assert_eq!(fallback, card_image_url("Zinnia, Valley's Voice", ImageSize::Normal));

    // no card list at all
    let fallback = commander_image_url(dq.get("spooky-undead").unwrap());
    assert!(fallback.contains("exact=Wilhelt%2C+the+Rotcleaver"));
}

#[test]
fn image_size_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&ImageSize::BorderCrop).unwrap(), "\"border_crop\"");
    assert_eq!(ImageSize::default(), ImageSize::Normal);
}
