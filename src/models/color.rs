use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinderError;

// ---------------------------------------------------------------------------
// Color: one of the five colors of Magic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }

    /// Parse a run of color symbols such as `"WUB"`, skipping anything unknown.
    pub fn parse_symbols(s: &str) -> Vec<Color> {
        let mut colors = Vec::new();
        for c in s.chars() {
            if let Ok(color) = c.to_string().parse::<Color>() {
                if !colors.contains(&color) {
                    colors.push(color);
                }
            }
        }
        colors
    }
}

impl FromStr for Color {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "W" | "WHITE" => Ok(Color::White),
            "U" | "BLUE" => Ok(Color::Blue),
            "B" | "BLACK" => Ok(Color::Black),
            "R" | "RED" => Ok(Color::Red),
            "G" | "GREEN" => Ok(Color::Green),
            other => Err(FinderError::InvalidArgument(format!(
                "Unknown color: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
