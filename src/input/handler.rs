//! Argument validation.
//!
//! `InputHandler` turns the raw positional arguments into an [`Input`].
//! The only failure it reports is a wrong argument count; bad values are
//! replaced with defaults or clamped into range and logged.

use crate::core::{
    DeckSize, Input, DEFAULT_DECK_SIZE, DEFAULT_PLAYER_NUMBER, MAXIMUM_PLAYER_NUMBER,
    MINIMUM_PLAYER_NUMBER,
};

use super::log::Logger;
use super::usage::Usage;

/// Exit status for a wrong argument count.
pub const USAGE_EXIT_CODE: u8 = 1;

const EXPECTED_ARGUMENTS: usize = 2;

/// What the validator decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentOutcome {
    /// Arguments were usable, possibly after correction.
    Accepted(Input),
    /// Wrong argument count; the caller should exit with
    /// [`USAGE_EXIT_CODE`].
    Fatal { usage_shown: bool },
}

impl ArgumentOutcome {
    #[must_use]
    pub fn input(self) -> Option<Input> {
        match self {
            ArgumentOutcome::Accepted(input) => Some(input),
            ArgumentOutcome::Fatal { .. } => None,
        }
    }

    /// Process exit status, if the program must stop here.
    #[must_use]
    pub fn exit_code(self) -> Option<u8> {
        match self {
            ArgumentOutcome::Accepted(_) => None,
            ArgumentOutcome::Fatal { .. } => Some(USAGE_EXIT_CODE),
        }
    }
}

/// Validates and corrects the `<players> <deck-size>` arguments.
pub struct InputHandler<U, L> {
    usage: U,
    logger: L,
}

impl<U: Usage, L: Logger> InputHandler<U, L> {
    pub fn new(usage: U, logger: L) -> Self {
        Self { usage, logger }
    }

    /// Validate `args` (program name already stripped).
    ///
    /// Resolution order matters for which message gets logged: both
    /// values bad, then only the player count, then only the deck.
    pub fn handle_arguments<S: AsRef<str>>(&self, args: &[S]) -> ArgumentOutcome {
        if args.len() != EXPECTED_ARGUMENTS {
            self.usage.message();
            return ArgumentOutcome::Fatal { usage_shown: true };
        }

        let player_token = args[0].as_ref();
        let deck_token = args[1].as_ref();

        let player_number = parse_player_number(player_token);
        let deck_size = DeckSize::from_code(deck_token);

        let input = match (player_number, deck_size) {
            (None, None) => {
                self.logger.info(&format!(
                    "Values were corrected to {DEFAULT_PLAYER_NUMBER} players on a {DEFAULT_DECK_SIZE} deck"
                ));
                Input::default()
            }
            (None, Some(deck_size)) => {
                self.logger.info(&format!(
                    "Number of players set to {DEFAULT_PLAYER_NUMBER}, you provided unparseable input {player_token}"
                ));
                Input::with_deck_size(deck_size)
            }
            (Some(requested), None) => {
                let player_count = self.correct_player_number(requested);
                self.logger.info(&format!(
                    "Deck set to {DEFAULT_DECK_SIZE}, you provided unrecognized value: {deck_token}"
                ));
                Input::with_player_count(player_count)
            }
            (Some(requested), Some(deck_size)) => {
                Input::new(self.correct_player_number(requested), deck_size)
            }
        };

        ArgumentOutcome::Accepted(input)
    }

    /// Clamp into the supported range, logging when the value moved.
    fn correct_player_number(&self, requested: i32) -> u8 {
        let corrected = clamp_player_number(requested);
        if i32::from(corrected) != requested {
            self.logger.info(&format!(
                "Number of players corrected to {corrected}, you provided {requested}"
            ));
        }
        corrected
    }
}

/// First code point of each run of ten Unicode decimal digits (`Nd`).
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// ASCII equivalent of a decimal digit from any script.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let code = u32::from(c);
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
}

/// Parse a base-10 player count.
///
/// A leading `+` or `-` is allowed and digits may come from any script
/// (`٣` and `３` both read as 3). Whitespace, other characters and
/// values outside `i32` are rejected.
#[must_use]
pub fn parse_player_number(token: &str) -> Option<i32> {
    let (sign, digits) = match token.strip_prefix(['+', '-']) {
        Some(rest) => (&token[..1], rest),
        None => ("", token),
    };

    let mut normalized = String::with_capacity(token.len());
    normalized.push_str(sign);
    for c in digits.chars() {
        normalized.push(ascii_digit(c)?);
    }

    normalized.parse().ok()
}

/// Clamp a requested player count to
/// `MINIMUM_PLAYER_NUMBER..=MAXIMUM_PLAYER_NUMBER`.
#[must_use]
pub fn clamp_player_number(requested: i32) -> u8 {
    let clamped = requested.clamp(
        i32::from(MINIMUM_PLAYER_NUMBER),
        i32::from(MAXIMUM_PLAYER_NUMBER),
    );
    // In range after the clamp.
    clamped as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CountingUsage, RecordingLogger};

    fn run(args: &[&str]) -> (ArgumentOutcome, Vec<String>, usize) {
        let usage = CountingUsage::new();
        let logger = RecordingLogger::new();
        let outcome = InputHandler::new(&usage, &logger).handle_arguments(args);
        (outcome, logger.messages(), usage.times_shown())
    }

    #[test]
    fn test_parse_player_number() {
        assert_eq!(parse_player_number("3"), Some(3));
        assert_eq!(parse_player_number("+4"), Some(4));
        assert_eq!(parse_player_number("-7"), Some(-7));
        assert_eq!(parse_player_number(""), None);
        assert_eq!(parse_player_number(" 3"), None);
        assert_eq!(parse_player_number("3.0"), None);
        assert_eq!(parse_player_number("2147483648"), None);
        assert_eq!(parse_player_number("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_player_number("+"), None);
        assert_eq!(parse_player_number("+-3"), None);
    }

    #[test]
    fn test_parse_player_number_other_scripts() {
        assert_eq!(parse_player_number("\u{0663}"), Some(3));
        assert_eq!(parse_player_number("\u{FF13}"), Some(3));
        assert_eq!(parse_player_number("\u{0967}\u{0966}"), Some(10));
        assert_eq!(parse_player_number("-\u{0E54}"), Some(-4));
        assert_eq!(parse_player_number("\u{1D7D9}"), Some(1));
        // Numeric but not a decimal digit.
        assert_eq!(parse_player_number("\u{00B2}"), None);
        assert_eq!(parse_player_number("\u{2163}"), None);
        // Sign must be ASCII.
        assert_eq!(parse_player_number("\u{FF0B}3"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_accepted() {
        let (outcome, messages, _) = run(&["\u{0663}", "small"]);
        assert_eq!(outcome.input(), Some(Input::new(3, DeckSize::Small)));
        assert!(messages.is_empty());

        let (outcome, messages, _) = run(&["\u{FF13}", "large"]);
        assert_eq!(outcome.input(), Some(Input::new(3, DeckSize::Large)));
        assert!(messages.is_empty());

        let (outcome, messages, _) = run(&["\u{0669}", "large"]);
        assert_eq!(outcome.input(), Some(Input::new(5, DeckSize::Large)));
        assert_eq!(messages, vec!["Number of players corrected to 5, you provided 9"]);
    }

    #[test]
    fn test_clamp_player_number() {
        assert_eq!(clamp_player_number(i32::MIN), 2);
        assert_eq!(clamp_player_number(1), 2);
        assert_eq!(clamp_player_number(2), 2);
        assert_eq!(clamp_player_number(4), 4);
        assert_eq!(clamp_player_number(5), 5);
        assert_eq!(clamp_player_number(6), 5);
        assert_eq!(clamp_player_number(i32::MAX), 5);
    }

    #[test]
    fn test_valid_arguments_pass_through_silently() {
        let (outcome, messages, shown) = run(&["4", "small"]);
        assert_eq!(outcome, ArgumentOutcome::Accepted(Input::new(4, DeckSize::Small)));
        assert!(messages.is_empty());
        assert_eq!(shown, 0);
    }

    #[test]
    fn test_both_invalid_uses_defaults() {
        let (outcome, messages, _) = run(&["abc", "xyz"]);
        assert_eq!(outcome.input(), Some(Input::default()));
        assert_eq!(messages, vec!["Values were corrected to 2 players on a large deck"]);
    }

    #[test]
    fn test_both_invalid_wins_over_out_of_range() {
        // Unparseable count and bad deck: no clamping message.
        let (_, messages, _) = run(&["99999999999", "tiny"]);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Values were corrected"));
    }

    #[test]
    fn test_player_number_invalid() {
        let (outcome, messages, _) = run(&["abc", "small"]);
        assert_eq!(outcome.input(), Some(Input::new(DEFAULT_PLAYER_NUMBER, DeckSize::Small)));
        assert_eq!(
            messages,
            vec!["Number of players set to 2, you provided unparseable input abc"]
        );
    }

    #[test]
    fn test_deck_invalid_with_clamping() {
        let (outcome, messages, _) = run(&["9", "medium"]);
        assert_eq!(outcome.input(), Some(Input::new(5, DEFAULT_DECK_SIZE)));
        assert_eq!(
            messages,
            vec![
                "Number of players corrected to 5, you provided 9",
                "Deck set to large, you provided unrecognized value: medium",
            ]
        );
    }

    #[test]
    fn test_low_count_clamped() {
        let (outcome, messages, _) = run(&["0", "LARGE"]);
        assert_eq!(outcome.input(), Some(Input::new(2, DeckSize::Large)));
        assert_eq!(messages, vec!["Number of players corrected to 2, you provided 0"]);
    }

    #[test]
    fn test_wrong_arity_is_fatal() {
        for args in [&[][..], &["3"][..], &["3", "small", "x"][..]] {
            let (outcome, messages, shown) = run(args);
            assert_eq!(outcome, ArgumentOutcome::Fatal { usage_shown: true });
            assert_eq!(outcome.exit_code(), Some(USAGE_EXIT_CODE));
            assert_eq!(outcome.input(), None);
            assert!(messages.is_empty());
            assert_eq!(shown, 1);
        }
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args = vec!["3".to_string(), "Small".to_string()];
        let handler = InputHandler::new(CountingUsage::new(), RecordingLogger::new());
        let outcome = handler.handle_arguments(&args);
        assert_eq!(outcome.exit_code(), None);
        assert_eq!(outcome.input(), Some(Input::new(3, DeckSize::Small)));
    }
}
