//! Hand representation shared by players and the dealer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Default stand threshold for players and the dealer.
pub const DEFAULT_STAND_THRESHOLD: u8 = 14;

/// Evaluates a set of cards under the ace-softening rule.
///
/// Aces enter the total at 1. While an unpromoted ace remains and the running
/// total is at most 7, one ace is promoted from 1 to 14 (adding 13). The
/// cutoff of 7 is this variant's rule, not standard blackjack's.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        let value = card.value();
        total = total.saturating_add(value);
        if value == 1 {
            aces += 1;
        }
    }

    while aces > 0 && total <= 7 {
        total += 13;
        aces -= 1;
    }

    total
}

/// A hand of cards with a nickname and a stand threshold.
///
/// Hands are created empty at table construction and reused across rounds;
/// [`Hand::discard`] empties a hand without destroying it.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards currently held, in deal order.
    cards: Vec<Card>,
    /// Display name, e.g. `Player #1` or `Dealer`.
    nickname: String,
    /// The hand keeps hitting while its value is at or below this.
    stand_threshold: u8,
}

impl Hand {
    /// Creates an empty hand with the default stand threshold of 14.
    #[must_use]
    pub fn new(nickname: impl Into<String>) -> Self {
        Self::with_stand_threshold(nickname, DEFAULT_STAND_THRESHOLD)
    }

    /// Creates an empty hand with an explicit stand threshold.
    #[must_use]
    pub fn with_stand_threshold(nickname: impl Into<String>, stand_threshold: u8) -> Self {
        Self {
            cards: Vec::new(),
            nickname: nickname.into(),
            stand_threshold,
        }
    }

    /// Returns the hand's nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the stand threshold.
    #[must_use]
    pub const fn stand_threshold(&self) -> u8 {
        self.stand_threshold
    }

    /// Calculates the value of the hand with ace-softening.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand keeps drawing: value at or below the stand
    /// threshold.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.value() <= self.stand_threshold
    }

    /// Returns whether the hand is bust (value over 21).
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is an automatic win: exactly 21, or five
    /// cards under 21 (the five-card trick).
    #[must_use]
    pub fn is_natural_winner(&self) -> bool {
        let value = self.value();
        value == 21 || (self.cards.len() == 5 && value < 21)
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the hand and returns all of its cards, in deal order.
    pub fn discard(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("-");
        }
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
