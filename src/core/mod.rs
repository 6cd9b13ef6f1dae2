//! Core types: seats, seeded RNG, game input and settings.

pub mod player;
pub mod rng;
pub mod config;
pub mod settings;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{
    DeckSize, Input, ParseDeckSizeError, PlayerCountError,
    DEFAULT_DECK_SIZE, DEFAULT_PLAYER_NUMBER, MAXIMUM_PLAYER_NUMBER, MINIMUM_PLAYER_NUMBER,
};
pub use settings::{GameSettings, SettingsError};
