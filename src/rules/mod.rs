//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - How one round changes the state
//! - Win/draw conditions

pub mod engine;

pub use engine::{GameResult, RulesEngine};
