//! Rules engine trait for games that play themselves out.
//!
//! War has no player decisions, so a game is just rounds applied to a
//! state until `is_terminal` reports a result.

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Nobody is left holding cards.
    Draw,
    /// Shared victory, e.g. tied card counts when the round limit hits.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => f.write_str("Draw"),
            GameResult::Winners(ps) => {
                let names: Vec<String> = ps.iter().map(ToString::to_string).collect();
                write!(f, "{} share the win", names.join(", "))
            }
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `play_round`: Must be deterministic given the state (including its RNG)
/// - `is_terminal`: Return None if the game continues; must eventually
///   return `Some` so that `play_out` terminates
pub trait RulesEngine {
    type State;
    /// What one round reports back.
    type Round;

    /// Play a single round.
    fn play_round(&self, state: &mut Self::State) -> Self::Round;

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;

    /// Play rounds until the game ends.
    fn play_out(&self, state: &mut Self::State) -> GameResult {
        loop {
            if let Some(result) = self.is_terminal(state) {
                return result;
            }
            self.play_round(state);
        }
    }
}
