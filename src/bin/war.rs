//! `war <players> <deck-size>`

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use war::input::{ArgumentOutcome, ConsoleUsage, InputHandler, TracingLogger, USAGE_EXIT_CODE};
use war::{GameSettings, Input, RulesEngine, WarGameBuilder};

const LOG_ENV: &str = "WAR_LOG";
const SETTINGS_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let handler = InputHandler::new(ConsoleUsage, TracingLogger);

    let input = match handler.handle_arguments(&args) {
        ArgumentOutcome::Accepted(input) => input,
        ArgumentOutcome::Fatal { .. } => return ExitCode::from(USAGE_EXIT_CODE),
    };

    match GameSettings::from_env().context("reading WAR_* settings") {
        Ok(settings) => {
            play(input, &settings);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(SETTINGS_EXIT_CODE)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn play(input: Input, settings: &GameSettings) {
    info!(seed = settings.seed, "dealing {input}");

    let (game, mut state) = WarGameBuilder::new()
        .input(input)
        .settings(settings)
        .build(settings.seed);

    let result = game.play_out(&mut state);

    info!(rounds = state.round(), wars = state.wars(), "game over");
    println!(
        "{result} after {} rounds ({} wars)",
        state.round(),
        state.wars()
    );
}
