//! Usage screen shown when the argument count is wrong.

use std::cell::Cell;
use std::io::Write;

use crate::core::{MAXIMUM_PLAYER_NUMBER, MINIMUM_PLAYER_NUMBER};

/// Shows the usage screen.
pub trait Usage {
    fn message(&self);
}

/// Usage text for the `war` binary.
#[must_use]
pub fn usage_text() -> String {
    format!(
        "Usage: war <players> <deck-size>\n\
         \n\
         Arguments:\n  \
           <players>    number of players, {MINIMUM_PLAYER_NUMBER}-{MAXIMUM_PLAYER_NUMBER}\n  \
           <deck-size>  `small` (32 cards) or `large` (52 cards)\n\
         \n\
         Environment:\n  \
           WAR_SEED        seed for shuffling\n  \
           WAR_MAX_ROUNDS  rounds before the game is called\n  \
           WAR_FACE_DOWN   cards laid face down in a war\n  \
           WAR_LOG         log filter, e.g. `debug`\n"
    )
}

/// Prints the usage text to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleUsage;

impl Usage for ConsoleUsage {
    fn message(&self) {
        // Nothing useful to do if stderr is gone.
        let _ = std::io::stderr().write_all(usage_text().as_bytes());
    }
}

/// Counts how many times usage was shown.
#[derive(Debug, Default)]
pub struct CountingUsage {
    shown: Cell<usize>,
}

impl CountingUsage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn times_shown(&self) -> usize {
        self.shown.get()
    }
}

impl Usage for CountingUsage {
    fn message(&self) {
        self.shown.set(self.shown.get() + 1);
    }
}

impl<U: Usage + ?Sized> Usage for &U {
    fn message(&self) {
        (**self).message();
    }
}
