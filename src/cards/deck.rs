//! Building, shuffling and dealing a deck.

use im::Vector;

use super::card::{Card, Rank, Suit};
use crate::core::{DeckSize, GameRng, PlayerId, PlayerMap};

impl DeckSize {
    /// Lowest rank in this deck.
    #[must_use]
    pub const fn lowest_rank(self) -> Rank {
        match self {
            DeckSize::Small => Rank::Seven,
            DeckSize::Large => Rank::Two,
        }
    }
}

/// An ordered stack of cards, top first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck, suit by suit, low rank first.
    #[must_use]
    pub fn new(size: DeckSize) -> Self {
        let lowest = size.lowest_rank();
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| {
                Rank::ALL
                    .into_iter()
                    .filter(move |&rank| rank >= lowest)
                    .map(move |rank| Card::new(rank, suit))
            })
            .collect();

        Self { cards }
    }

    #[must_use]
    pub fn shuffled(size: DeckSize, rng: &mut GameRng) -> Self {
        let mut deck = Self::new(size);
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal one card at a time around the table, starting with the first
    /// seat. When the deck does not divide evenly the earlier seats hold
    /// one card more.
    #[must_use]
    pub fn deal(self, player_count: usize) -> PlayerMap<Vector<Card>> {
        let mut piles: PlayerMap<Vector<Card>> = PlayerMap::with_default(player_count);

        for (i, card) in self.cards.into_iter().enumerate() {
            let seat = PlayerId::new((i % player_count) as u8);
            piles[seat].push_back(card);
        }

        piles
    }
}
