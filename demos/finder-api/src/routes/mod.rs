pub mod card_sets;
pub mod decks;
pub mod functions;
pub mod matching;
pub mod saved;
