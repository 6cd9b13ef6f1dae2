//! The card game War for 2-5 players.
//!
//! - The shuffled deck is dealt round-robin, face down
//! - Each battle every player with cards turns up their top card
//! - Highest rank takes all turned-up cards to the bottom of their pile
//! - Tied high cards go to war: a few cards face down, then one more up
//! - The last player holding cards wins
//!
//! A round limit stops games that would otherwise run for a very long
//! time; the player holding the most cards then wins.

mod game;

pub use game::{Battle, FaceUp, WarGame, WarGameBuilder, WarState};
