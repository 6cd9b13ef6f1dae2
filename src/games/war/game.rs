//! War game implementation.

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, Deck};
use crate::core::{
    DeckSize, GameRng, GameSettings, Input, PlayerId, PlayerMap, MAXIMUM_PLAYER_NUMBER,
    MINIMUM_PLAYER_NUMBER,
};
use crate::core::settings::{DEFAULT_FACE_DOWN, DEFAULT_MAX_ROUNDS};
use crate::rules::{GameResult, RulesEngine};

/// Cards turned up in one battle, in the order they were shown.
pub type FaceUp = SmallVec<[(PlayerId, Card); 8]>;

/// The War rules for one table.
#[derive(Clone, Debug)]
pub struct WarGame {
    player_count: usize,
    deck_size: DeckSize,
    max_rounds: u32,
    face_down: usize,
}

/// Piles, unclaimed cards and progress counters.
///
/// Piles are `im` vectors, so cloning a state is cheap.
#[derive(Clone, Debug)]
pub struct WarState {
    piles: PlayerMap<Vector<Card>>,
    carried: Vector<Card>,
    round: u32,
    wars: u32,
    rng: GameRng,
}

/// What happened in one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    pub round: u32,
    pub face_up: FaceUp,
    /// Tie-breaks fought before a winner emerged.
    pub wars: u32,
    /// `None` when every tied player ran out of cards.
    pub winner: Option<PlayerId>,
    /// Cards taken by the winner, or carried over when nobody won.
    pub pot: usize,
}

/// Builder for a WarGame.
pub struct WarGameBuilder {
    player_count: usize,
    deck_size: DeckSize,
    max_rounds: u32,
    face_down: usize,
}

impl Default for WarGameBuilder {
    fn default() -> Self {
        let input = Input::default();
        Self {
            player_count: input.player_count() as usize,
            deck_size: input.deck_size(),
            max_rounds: DEFAULT_MAX_ROUNDS,
            face_down: DEFAULT_FACE_DOWN,
        }
    }
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take player count and deck from validated input.
    pub fn input(self, input: Input) -> Self {
        self.player_count(input.player_count() as usize)
            .deck_size(input.deck_size())
    }

    /// Take the round limit and face-down count from settings.
    pub fn settings(self, settings: &GameSettings) -> Self {
        self.max_rounds(settings.max_rounds)
            .face_down(settings.face_down)
    }

    pub fn player_count(mut self, count: usize) -> Self {
        let supported = usize::from(MINIMUM_PLAYER_NUMBER)..=usize::from(MAXIMUM_PLAYER_NUMBER);
        assert!(
            supported.contains(&count),
            "Player count must be {MINIMUM_PLAYER_NUMBER}-{MAXIMUM_PLAYER_NUMBER}"
        );
        self.player_count = count;
        self
    }

    pub fn deck_size(mut self, size: DeckSize) -> Self {
        self.deck_size = size;
        self
    }

    pub fn max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Round limit must be positive");
        self.max_rounds = rounds;
        self
    }

    pub fn face_down(mut self, cards: usize) -> Self {
        self.face_down = cards;
        self
    }

    /// Shuffle, deal and return the game with its opening state.
    pub fn build(self, seed: u64) -> (WarGame, WarState) {
        let rng = GameRng::new(seed);
        let mut deal_rng = rng.for_context("deal");
        let piles = Deck::shuffled(self.deck_size, &mut deal_rng).deal(self.player_count);

        let state = WarState {
            piles,
            carried: Vector::new(),
            round: 0,
            wars: 0,
            rng: rng.for_context("pickup"),
        };

        let game = WarGame {
            player_count: self.player_count,
            deck_size: self.deck_size,
            max_rounds: self.max_rounds,
            face_down: self.face_down,
        };

        (game, state)
    }
}

impl WarGame {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn deck_size(&self) -> DeckSize {
        self.deck_size
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn face_down(&self) -> usize {
        self.face_down
    }
}

impl WarState {
    /// State with explicit piles, top card first. Used to set up
    /// specific deals.
    pub fn from_piles(piles: Vec<Vec<Card>>, seed: u64) -> Self {
        let mut map: PlayerMap<Vector<Card>> = PlayerMap::with_default(piles.len());
        for ((_, slot), pile) in map.iter_mut().zip(piles) {
            *slot = pile.into_iter().collect();
        }

        Self {
            piles: map,
            carried: Vector::new(),
            round: 0,
            wars: 0,
            rng: GameRng::new(seed).for_context("pickup"),
        }
    }

    #[must_use]
    pub fn pile(&self, player: PlayerId) -> &Vector<Card> {
        &self.piles[player]
    }

    #[must_use]
    pub fn pile_size(&self, player: PlayerId) -> usize {
        self.piles[player].len()
    }

    /// Cards left on the table after a battle nobody won.
    #[must_use]
    pub fn carried(&self) -> &Vector<Card> {
        &self.carried
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Total wars fought so far.
    #[must_use]
    pub fn wars(&self) -> u32 {
        self.wars
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.piles.player_count()
    }

    /// Cards in all piles plus carried cards.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|(_, pile)| pile.len()).sum::<usize>() + self.carried.len()
    }

    /// Players still holding cards, in seat order.
    pub fn players_with_cards(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.piles
            .iter()
            .filter(|(_, pile)| !pile.is_empty())
            .map(|(player, _)| player)
    }
}

impl RulesEngine for WarGame {
    type State = WarState;
    type Round = Battle;

    fn play_round(&self, state: &mut WarState) -> Battle {
        state.round += 1;

        let mut pot: Vec<Card> = std::mem::take(&mut state.carried).into_iter().collect();
        let mut face_up = FaceUp::new();
        let mut wars = 0;

        let contenders: SmallVec<[PlayerId; 8]> = state.players_with_cards().collect();
        let mut showing: FaceUp = contenders
            .into_iter()
            .filter_map(|player| state.piles[player].pop_front().map(|card| (player, card)))
            .collect();

        let winner = loop {
            pot.extend(showing.iter().map(|&(_, card)| card));
            face_up.extend(showing.iter().copied());

            let Some(best) = showing.iter().map(|(_, card)| card.rank).max() else {
                break None;
            };
            let leaders: SmallVec<[PlayerId; 8]> = showing
                .iter()
                .filter(|(_, card)| card.rank == best)
                .map(|&(player, _)| player)
                .collect();

            if let [only] = leaders[..] {
                break Some(only);
            }

            wars += 1;
            showing.clear();
            for player in leaders {
                let pile = &mut state.piles[player];
                // Always keep one card back to turn up.
                let down = self.face_down.min(pile.len().saturating_sub(1));
                let rest = pile.split_off(down);
                pot.extend(std::mem::replace(pile, rest));

                if let Some(card) = pile.pop_front() {
                    showing.push((player, card));
                }
            }
        };

        state.wars += wars;
        let pot_size = pot.len();

        match winner {
            Some(player) => {
                state.rng.shuffle(&mut pot);
                state.piles[player].extend(pot);
            }
            None => state.carried = pot.into_iter().collect(),
        }

        debug!(
            round = state.round,
            winner = ?winner,
            wars,
            pot = pot_size,
            "battle"
        );

        Battle {
            round: state.round,
            face_up,
            wars,
            winner,
            pot: pot_size,
        }
    }

    fn is_terminal(&self, state: &WarState) -> Option<GameResult> {
        let holding: SmallVec<[PlayerId; 8]> = state.players_with_cards().collect();

        match holding[..] {
            [] => Some(GameResult::Draw),
            [only] => Some(GameResult::Winner(only)),
            _ if state.round >= self.max_rounds => Some(leaders_by_count(state, &holding)),
            _ => None,
        }
    }
}

/// Result when the round limit stops the game: most cards wins.
fn leaders_by_count(state: &WarState, holding: &[PlayerId]) -> GameResult {
    let most = holding
        .iter()
        .map(|&player| state.pile_size(player))
        .max()
        .unwrap_or(0);

    let mut leaders: Vec<PlayerId> = holding
        .iter()
        .copied()
        .filter(|&player| state.pile_size(player) == most)
        .collect();

    if leaders.len() == 1 {
        GameResult::Winner(leaders.remove(0))
    } else {
        GameResult::Winners(leaders)
    }
}
