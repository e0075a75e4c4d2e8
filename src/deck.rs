//! The card deck.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards. The top of the deck is the end of the
/// underlying vector.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the remaining cards in place with a uniform Fisher-Yates
    /// permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    ///
    /// Callers are expected to recycle the discard pile before the deck runs
    /// out; see [`Table::play_rounds`](crate::Table::play_rounds).
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Adds a single card to the deck.
    ///
    /// Cards land on top, but every recycle is followed by a shuffle before
    /// the next deal, so the insertion position does not matter.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds a sequence of cards to the deck.
    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
