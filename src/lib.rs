//! # war
//!
//! The card game War, played out from two command-line arguments:
//! the number of players and the deck size.
//!
//! ## Input handling
//!
//! Arguments are never rejected for their values. An unparseable player
//! count or unknown deck code falls back to a default, an out-of-range
//! count is clamped to 2-5, and each correction is logged. Only a wrong
//! argument count stops the program, after printing usage.
//!
//! ```
//! use war::core::{DeckSize, Input};
//! use war::input::{ArgumentOutcome, CountingUsage, InputHandler, RecordingLogger};
//!
//! let logger = RecordingLogger::new();
//! let handler = InputHandler::new(CountingUsage::new(), &logger);
//!
//! let outcome = handler.handle_arguments(&["7", "Small"]);
//! assert_eq!(outcome, ArgumentOutcome::Accepted(Input::new(5, DeckSize::Small)));
//! assert_eq!(logger.messages(), vec!["Number of players corrected to 5, you provided 7"]);
//! ```
//!
//! ## Modules
//!
//! - `core`: Seats, seeded RNG, validated input and environment settings
//! - `input`: Argument validation, usage screen, correction logging
//! - `cards`: Ranks, suits, decks and dealing
//! - `rules`: RulesEngine trait and game results
//! - `games`: The War game itself

pub mod core;
pub mod input;
pub mod cards;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    DeckSize, GameRng, GameSettings, Input, PlayerId, PlayerMap, SettingsError,
};

pub use crate::input::{ArgumentOutcome, InputHandler, Logger, Usage};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::war::{Battle, WarGame, WarGameBuilder, WarState};
