use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Availability: how easy a card set is to buy today
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Availability {
    InPrint,
    Limited,
    SecondaryOnly,
}

impl TryFrom<u8> for Availability {
    type Error = String;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Availability::InPrint),
            2 => Ok(Availability::Limited),
            3 => Ok(Availability::SecondaryOnly),
            other => Err(format!("unknown availability tier {}", other)),
        }
    }
}

impl From<Availability> for u8 {
    fn from(tier: Availability) -> u8 {
        match tier {
            Availability::InPrint => 1,
            Availability::Limited => 2,
            Availability::SecondaryOnly => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// CardSet: a themed collector product (Secret Lair drop, crossover set, ...)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub id: String,
    pub name: String,
    pub franchise: String,
    pub year: u16,
    pub tier: Availability,
    #[serde(default)]
    pub cards: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub theme_ids: Vec<String>,
}
