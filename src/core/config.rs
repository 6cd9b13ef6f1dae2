//! Game configuration: deck size and the validated command-line input.
//!
//! `Input` is the only value the argument validator hands to the rest of
//! the program. Its constructors mirror the ways the validator can fill
//! it in: both values defaulted, only one defaulted, or neither.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest players a game can be dealt for.
pub const MINIMUM_PLAYER_NUMBER: u8 = 2;

/// Most players a game can be dealt for.
pub const MAXIMUM_PLAYER_NUMBER: u8 = 5;

/// Player count used when the first argument cannot be parsed.
pub const DEFAULT_PLAYER_NUMBER: u8 = 2;

/// Deck used when the second argument is not a known code.
pub const DEFAULT_DECK_SIZE: DeckSize = DeckSize::Large;

/// Which deck the game is dealt from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckSize {
    /// 32-card piquet deck, sevens through aces.
    Small,
    /// 52-card standard deck.
    Large,
}

impl DeckSize {
    pub const ALL: [DeckSize; 2] = [DeckSize::Small, DeckSize::Large];

    /// Resolve a deck from its command-line code, ignoring case.
    ///
    /// ```
    /// use war::core::DeckSize;
    ///
    /// assert_eq!(DeckSize::from_code("SMALL"), Some(DeckSize::Small));
    /// assert_eq!(DeckSize::from_code("medium"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<DeckSize> {
        Self::ALL
            .into_iter()
            .find(|size| size.code().eq_ignore_ascii_case(code))
    }

    /// The lowercase command-line code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            DeckSize::Small => "small",
            DeckSize::Large => "large",
        }
    }

    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            DeckSize::Small => 32,
            DeckSize::Large => 52,
        }
    }
}

impl std::fmt::Display for DeckSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown deck code through `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized deck size `{0}`, expected `small` or `large`")]
pub struct ParseDeckSizeError(pub String);

impl std::str::FromStr for DeckSize {
    type Err = ParseDeckSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeckSize::from_code(s).ok_or_else(|| ParseDeckSizeError(s.to_string()))
    }
}

/// Error returned when a player count falls outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player count {0} is outside {min}-{max}", min = MINIMUM_PLAYER_NUMBER, max = MAXIMUM_PLAYER_NUMBER)]
pub struct PlayerCountError(pub u8);

/// Validated game input: how many players and which deck.
///
/// Every constructor keeps `player_count` within
/// `MINIMUM_PLAYER_NUMBER..=MAXIMUM_PLAYER_NUMBER`. Deserialization goes
/// through [`Input::try_new`] so it cannot bypass the range check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInput")]
pub struct Input {
    player_count: u8,
    deck_size: DeckSize,
}

/// Unchecked wire form of [`Input`].
#[derive(Deserialize)]
struct RawInput {
    player_count: u8,
    deck_size: DeckSize,
}

impl TryFrom<RawInput> for Input {
    type Error = PlayerCountError;

    fn try_from(raw: RawInput) -> Result<Self, Self::Error> {
        Input::try_new(raw.player_count, raw.deck_size)
    }
}

impl Input {
    /// Both values given, checked against the supported range.
    pub fn try_new(player_count: u8, deck_size: DeckSize) -> Result<Self, PlayerCountError> {
        if !(MINIMUM_PLAYER_NUMBER..=MAXIMUM_PLAYER_NUMBER).contains(&player_count) {
            return Err(PlayerCountError(player_count));
        }
        Ok(Self {
            player_count,
            deck_size,
        })
    }

    /// Both values given.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` is outside the supported range; the
    /// validator clamps before calling this.
    #[must_use]
    pub fn new(player_count: u8, deck_size: DeckSize) -> Self {
        match Self::try_new(player_count, deck_size) {
            Ok(input) => input,
            Err(err) => panic!("{err}"),
        }
    }

    /// Given player count on the default deck.
    #[must_use]
    pub fn with_player_count(player_count: u8) -> Self {
        Self::new(player_count, DEFAULT_DECK_SIZE)
    }

    /// Default player count on the given deck.
    #[must_use]
    pub fn with_deck_size(deck_size: DeckSize) -> Self {
        Self::new(DEFAULT_PLAYER_NUMBER, deck_size)
    }

    #[must_use]
    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    #[must_use]
    pub fn deck_size(&self) -> DeckSize {
        self.deck_size
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NUMBER, DEFAULT_DECK_SIZE)
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} players on a {} deck", self.player_count, self.deck_size)
    }
}
