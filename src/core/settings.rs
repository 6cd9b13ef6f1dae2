//! Tunables read from the environment.
//!
//! The command line is reserved for the two positional arguments, so
//! everything else comes from `WAR_*` variables.

use thiserror::Error;

pub const SEED_VAR: &str = "WAR_SEED";
pub const MAX_ROUNDS_VAR: &str = "WAR_MAX_ROUNDS";
pub const FACE_DOWN_VAR: &str = "WAR_FACE_DOWN";

pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;
pub const DEFAULT_FACE_DOWN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{var} must be an unsigned integer, got `{value}`")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be at least 1")]
    Zero { var: &'static str },
}

/// Game settings that are not part of the validated `Input`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub seed: u64,
    pub max_rounds: u32,
    /// Cards each tied player lays face down before turning up the next.
    pub face_down: usize,
}

impl GameSettings {
    /// Defaults with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            max_rounds: DEFAULT_MAX_ROUNDS,
            face_down: DEFAULT_FACE_DOWN,
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`. A missing variable takes its
    /// default; the seed defaults to a random one.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => parse_var(SEED_VAR, &raw)?,
            None => rand::random(),
        };

        let max_rounds = match lookup(MAX_ROUNDS_VAR) {
            Some(raw) => parse_var(MAX_ROUNDS_VAR, &raw)?,
            None => DEFAULT_MAX_ROUNDS,
        };
        if max_rounds == 0 {
            return Err(SettingsError::Zero { var: MAX_ROUNDS_VAR });
        }

        let face_down = match lookup(FACE_DOWN_VAR) {
            Some(raw) => parse_var(FACE_DOWN_VAR, &raw)?,
            None => DEFAULT_FACE_DOWN,
        };

        Ok(Self {
            seed,
            max_rounds,
            face_down,
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, SettingsError> {
    raw.trim().parse().map_err(|_| SettingsError::NotANumber {
        var,
        value: raw.to_string(),
    })
}
