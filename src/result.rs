//! Round result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Winner of one player-versus-dealer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won (including ties).
    Dealer,
}

/// Outcome of a single player's turn against the dealer.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// The player's nickname.
    pub nickname: String,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The player's final hand value.
    pub player_value: u8,
    /// Whether the player busted.
    pub player_busted: bool,
    /// The dealer's cards for this turn.
    pub dealer_cards: Vec<Card>,
    /// The dealer's hand value for this turn.
    pub dealer_value: u8,
    /// Whether the dealer busted on this turn.
    pub dealer_busted: bool,
    /// Who won the turn.
    pub winner: Winner,
}

/// Outcome of a full round: one turn per player, in construction order.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// The 1-based round number.
    pub round: usize,
    /// One result per player.
    pub turns: Vec<TurnResult>,
}
