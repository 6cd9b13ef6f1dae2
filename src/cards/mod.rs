//! Playing cards and decks.
//!
//! - `card`: ranks, suits and cards
//! - `deck`: deck construction per `DeckSize`, shuffling and dealing

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
