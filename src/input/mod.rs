//! Command-line input handling.
//!
//! - `handler`: validates `<players> <deck-size>` into an `Input`
//! - `usage`: the usage screen shown on a wrong argument count
//! - `log`: where correction messages go
//!
//! The handler never exits the process itself. It returns
//! `ArgumentOutcome::Fatal` and leaves the exit to the binary.

pub mod handler;
pub mod log;
pub mod usage;

pub use handler::{
    clamp_player_number, parse_player_number, ArgumentOutcome, InputHandler, USAGE_EXIT_CODE,
};
pub use log::{Logger, RecordingLogger, TracingLogger};
pub use usage::{usage_text, ConsoleUsage, CountingUsage, Usage};
