use serde::{Deserialize, Serialize};

use super::color::Color;

// ---------------------------------------------------------------------------
// TagList: primary/secondary split used by every tag category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TagList {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
}

impl TagList {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Every tag, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.primary.iter().chain(self.secondary.iter())
    }
}

// ---------------------------------------------------------------------------
// DeckTags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeckTags {
    #[serde(default)]
    pub themes: TagList,
    #[serde(default)]
    pub archetype: TagList,
    #[serde(default)]
    pub creature_types: TagList,
    #[serde(default)]
    pub aesthetic_vibe: TagList,
    #[serde(default)]
    pub play_pattern: TagList,
    #[serde(default)]
    pub flavor_setting: TagList,
    #[serde(default)]
    pub tone: TagList,
    #[serde(default)]
    pub ip_meta_tags: Vec<String>,
    pub power_level: Option<u8>,
    pub complexity: Option<String>,
}

impl DeckTags {
    /// All tag categories paired with their names, in a stable order.
    pub fn categories(&self) -> [(&'static str, &TagList); 7] {
        [
            ("themes", &self.themes),
            ("archetype", &self.archetype),
            ("creature_types", &self.creature_types),
            ("aesthetic_vibe", &self.aesthetic_vibe),
            ("play_pattern", &self.play_pattern),
            ("flavor_setting", &self.flavor_setting),
            ("tone", &self.tone),
        ]
    }

    /// Number of tag categories holding at least one tag.
    pub fn populated_categories(&self) -> usize {
        self.categories()
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .count()
    }

    /// Every tag value across all categories, including `ip_meta_tags`.
    pub fn all_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self
            .categories()
            .into_iter()
            .flat_map(|(_, list)| list.iter().map(String::as_str))
            .collect();
        values.extend(self.ip_meta_tags.iter().map(String::as_str));
        values
    }
}

// ---------------------------------------------------------------------------
// DeckCard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeckCard {
    pub name: String,
    #[serde(default)]
    pub is_commander: bool,
    pub image_url: Option<String>,
    pub oracle_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Deck: a preconstructed Commander deck
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    pub id: String,
    pub name: String,
    pub commander: String,
    #[serde(default)]
    pub colors: Vec<Color>,
    pub color_identity: Option<String>,
    pub year: u16,
    pub set: String,
    #[serde(default = "default_ip")]
    pub ip: String,
    #[serde(default)]
    pub tags: DeckTags,
    #[serde(default)]
    pub cards: Vec<DeckCard>,
    pub edhrec_url: Option<String>,
    pub price: Option<f64>,
}

fn default_ip() -> String {
    crate::config::BASE_GAME_IP.to_string()
}

impl Deck {
    /// The card flagged as the deck's commander, if the card list has one.
    pub fn commander_card(&self) -> Option<&DeckCard> {
        self.cards.iter().find(|c| c.is_commander)
    }

    pub fn is_base_game(&self) -> bool {
        self.ip == crate::config::BASE_GAME_IP
    }

    /// Lower-cased text of every searchable field, space separated.
    pub fn searchable_text(&self) -> String {
        let mut fields: Vec<&str> = vec![
            self.name.as_str(),
            self.commander.as_str(),
            self.set.as_str(),
            self.ip.as_str(),
            self.tags.complexity.as_deref().unwrap_or(""),
        ];
        fields.extend(self.tags.all_values());
        fields.join(" ").to_lowercase()
    }
}
