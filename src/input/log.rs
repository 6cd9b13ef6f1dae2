//! Sinks for the validator's correction messages.

use std::cell::RefCell;

/// Receives informational messages about corrected input.
pub trait Logger {
    fn info(&self, message: &str);
}

/// Forwards messages to `tracing` under the `war::input` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "war::input", "{message}");
    }
}

/// Keeps messages in memory, in the order they were logged.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: RefCell<Vec<String>>,
}

impl RecordingLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}
