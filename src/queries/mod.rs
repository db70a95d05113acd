//! Query modules for the precon finder.
//!
//! Each module provides a query struct that borrows the loaded
//! [`Catalog`](crate::catalog::Catalog) and exposes read-only lookups.

pub mod art;
pub mod card_sets;
pub mod decks;

pub use art::{ArtStyle, ArtStyleFilter};
pub use card_sets::CardSetQuery;
pub use decks::{BrowseFilter, DeckQuery};
