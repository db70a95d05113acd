pub mod card_set;
pub mod color;
pub mod deck;
pub mod decklist;

pub use card_set::*;
pub use color::*;
pub use deck::*;
pub use decklist::*;
