use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Commander,
    Creature,
    Instant,
    Sorcery,
    Artifact,
    Enchantment,
    Planeswalker,
    Land,
}

/// A card called out on the deck page, with a short pitch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightCard {
    pub name: String,
    pub card_type: CardType,
    pub why_its_cool: String,
    pub scryfall_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FullDecklist {
    /// Usually one name; partner commanders give two.
    #[serde(default)]
    pub commander: Vec<String>,
    #[serde(default)]
    pub creatures: Vec<String>,
    #[serde(default)]
    pub instants_sorceries: Vec<String>,
    #[serde(default)]
    pub artifacts_enchantments: Vec<String>,
    #[serde(default)]
    pub planeswalkers: Vec<String>,
    #[serde(default)]
    pub lands: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decklist {
    /// Id of the `Deck` this list belongs to.
    pub precon_id: String,
    #[serde(default)]
    pub highlight_cards: Vec<HighlightCard>,
    pub full_decklist: FullDecklist,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecklistCounts {
    pub commander: usize,
    pub creatures: usize,
    pub instants_sorceries: usize,
    pub artifacts_enchantments: usize,
    pub planeswalkers: usize,
    pub lands: usize,
    pub total: usize,
}

impl Decklist {
    pub fn counts(&self) -> DecklistCounts {
        let list = &self.full_decklist;
        let mut counts = DecklistCounts {
            commander: list.commander.len(),
            creatures: list.creatures.len(),
            instants_sorceries: list.instants_sorceries.len(),
            artifacts_enchantments: list.artifacts_enchantments.len(),
            planeswalkers: list.planeswalkers.len(),
            lands: list.lands.len(),
            total: 0,
        };
        counts.total = counts.commander
            + counts.creatures
            + counts.instants_sorceries
            + counts.artifacts_enchantments
            + counts.planeswalkers
            + counts.lands;
        counts
    }
}
