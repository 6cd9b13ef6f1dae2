//! Full-game tests.
//!
//! Games are driven from validated input the same way the binary does,
//! then checked for card conservation, determinism and termination.

use proptest::prelude::*;

use war::core::{DeckSize, GameSettings, Input, PlayerId};
use war::games::war::{WarGameBuilder, WarState};
use war::input::{CountingUsage, InputHandler, RecordingLogger};
use war::rules::{GameResult, RulesEngine};

fn build(input: Input, seed: u64) -> (war::WarGame, WarState) {
    WarGameBuilder::new()
        .input(input)
        .settings(&GameSettings::with_seed(seed))
        .build(seed)
}

/// Arguments flow through validation into a dealt game.
#[test]
fn test_arguments_to_deal() {
    let handler = InputHandler::new(CountingUsage::new(), RecordingLogger::new());
    let input = handler
        .handle_arguments(&["12", "small"])
        .input()
        .expect("two arguments are accepted");

    let (game, state) = build(input, 1);
    assert_eq!(game.player_count(), 5);
    assert_eq!(state.total_cards(), DeckSize::Small.card_count());

    let sizes: Vec<usize> = PlayerId::all(5).map(|p| state.pile_size(p)).collect();
    assert_eq!(sizes, vec![7, 7, 6, 6, 6]);
}

/// Every battle keeps the card count constant.
#[test]
fn test_cards_are_conserved() {
    for players in 2..=5u8 {
        for size in DeckSize::ALL {
            let (game, mut state) = build(Input::new(players, size), u64::from(players));
            let total = size.card_count();

            while game.is_terminal(&state).is_none() {
                let battle = game.play_round(&mut state);
                assert!(battle.pot > 0 || battle.winner.is_none());
                assert_eq!(state.total_cards(), total);
            }
        }
    }
}

/// Same seed, same game.
#[test]
fn test_deterministic_replay() {
    let input = Input::new(3, DeckSize::Large);
    let (game1, mut state1) = build(input, 12345);
    let (game2, mut state2) = build(input, 12345);

    for _ in 0..200 {
        if game1.is_terminal(&state1).is_some() {
            break;
        }
        assert_eq!(game1.play_round(&mut state1), game2.play_round(&mut state2));
    }

    assert_eq!(game1.play_out(&mut state1), game2.play_out(&mut state2));
    assert_eq!(state1.round(), state2.round());
    assert_eq!(state1.wars(), state2.wars());
}

/// Different seeds deal different hands.
#[test]
fn test_seed_changes_deal() {
    let input = Input::new(2, DeckSize::Large);
    let (_, a) = build(input, 1);
    let (_, b) = build(input, 2);
    assert_ne!(a.pile(PlayerId::new(0)), b.pile(PlayerId::new(0)));
}

/// A finished game has a sensible result.
#[test]
fn test_game_to_completion() {
    let (game, mut state) = WarGameBuilder::new()
        .player_count(4)
        .deck_size(DeckSize::Small)
        .max_rounds(5_000)
        .build(42);

    let result = game.play_out(&mut state);
    assert!(state.round() <= 5_000);

    match result {
        GameResult::Winner(winner) => {
            let holders: Vec<_> = state.players_with_cards().collect();
            assert!(holders.contains(&winner));
        }
        GameResult::Winners(winners) => {
            assert_eq!(state.round(), 5_000);
            assert!(winners.len() > 1);
        }
        GameResult::Draw => {
            assert_eq!(state.players_with_cards().count(), 0);
        }
    }
}

/// The round limit always stops the game.
#[test]
fn test_round_limit_stops_game() {
    let (game, mut state) = WarGameBuilder::new()
        .player_count(5)
        .max_rounds(3)
        .build(9);

    let _ = game.play_out(&mut state);
    assert!(state.round() <= 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any seed, table and war size conserves cards and terminates.
    #[test]
    fn prop_games_terminate(
        seed in any::<u64>(),
        players in 2..=5u8,
        small in any::<bool>(),
        face_down in 0..=4usize,
    ) {
        let size = if small { DeckSize::Small } else { DeckSize::Large };
        let (game, mut state) = WarGameBuilder::new()
            .input(Input::new(players, size))
            .face_down(face_down)
            .max_rounds(2_000)
            .build(seed);

        let result = game.play_out(&mut state);

        prop_assert!(state.round() <= 2_000);
        prop_assert_eq!(state.total_cards(), size.card_count());
        if let GameResult::Winner(p) = result {
            prop_assert!(p.index() < players as usize);
        }
    }
}
