//! The card table and its round protocol.

extern crate alloc;

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ConfigError, DealError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::{RoundResult, TurnResult, Winner};

/// Compares a player's hand against the dealer's.
///
/// Evaluated in priority order: a higher non-busted player value wins, a tie
/// goes to the house, a busted dealer loses to a standing player, and
/// everything else goes to the dealer.
#[must_use]
pub fn compare_hands(player: &Hand, dealer: &Hand) -> Winner {
    if player.value() > dealer.value() && !player.is_busted() {
        return Winner::Player;
    }
    if player.value() == dealer.value() {
        return Winner::Dealer;
    }
    if dealer.is_busted() && !player.is_busted() {
        return Winner::Player;
    }
    Winner::Dealer
}

/// A card table that plays rounds of the game against a dealer.
///
/// The table owns the deck, the discard pile, the dealer's hand, and one
/// hand per player. Together these always hold exactly the 52-card
/// universe.
///
/// # Example
///
/// ```
/// use cardtable::{Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 42).unwrap();
/// let results = table.play_rounds(1).unwrap();
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug)]
pub struct Table {
    /// The dealer's hand, shared across all player turns.
    dealer: Hand,
    /// Player hands, in construction order.
    players: Vec<Hand>,
    /// The deck.
    deck: Deck,
    /// Cards discarded from hands, recycled when the deck runs low.
    discard: Vec<Card>,
    /// Random number generator driving every shuffle.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with the given options and a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlayers`] when the player count is
    /// zero.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        if options.players == 0 {
            return Err(ConfigError::InvalidPlayers);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let players = (1..=options.players)
            .map(|i| Hand::with_stand_threshold(format!("Player #{i}"), options.stand_threshold))
            .collect();

        Ok(Self {
            dealer: Hand::with_stand_threshold("Dealer", options.dealer_stand_threshold),
            players,
            deck,
            discard: Vec::new(),
            rng,
        })
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player hands, in construction order.
    #[must_use]
    pub fn players(&self) -> &[Hand] {
        &self.players
    }

    /// Drains the discard pile into the deck and shuffles.
    fn recycle_and_shuffle(&mut self) {
        debug!(
            "recycling {} discarded cards into a deck of {}",
            self.discard.len(),
            self.deck.len()
        );
        self.deck.add_cards(self.discard.drain(..));
        self.deck.shuffle(&mut self.rng);
    }

    /// Recycles the discard pile when the deck is down to its last card.
    fn reshuffle_if_low(&mut self) {
        if self.deck.len() == 1 {
            self.recycle_and_shuffle();
        }
    }

    /// Draws cards into `hand` until it stands, busts, or wins naturally,
    /// recycling the discard pile whenever the deck is down to one card.
    ///
    /// Free-standing over the table's parts so a player hand and the deck
    /// can be borrowed at the same time.
    fn draw_loop(
        deck: &mut Deck,
        discard: &mut Vec<Card>,
        rng: &mut ChaCha8Rng,
        hand: &mut Hand,
    ) -> Result<(), DealError> {
        while hand.can_hit() && !hand.is_natural_winner() {
            if deck.len() == 1 {
                debug!(
                    "recycling {} discarded cards into a deck of {}",
                    discard.len(),
                    deck.len()
                );
                deck.add_cards(discard.drain(..));
                deck.shuffle(rng);
            }
            let card = deck.deal().ok_or(DealError::EmptyDeck)?;
            hand.add_card(card);
            if hand.is_busted() || hand.is_natural_winner() {
                break;
            }
        }
        Ok(())
    }

    /// Plays out one player's turn against the dealer.
    ///
    /// The dealer's previous hand is discarded after the player's draw loop
    /// and rebuilt for this turn, so every player faces a fresh dealer
    /// sub-round. When the player busts or wins naturally the dealer sits
    /// out with an empty hand.
    fn play_out(&mut self, index: usize) -> Result<(), DealError> {
        Self::draw_loop(
            &mut self.deck,
            &mut self.discard,
            &mut self.rng,
            &mut self.players[index],
        )?;

        self.discard.extend(self.dealer.discard());

        if !self.players[index].is_busted() && !self.players[index].is_natural_winner() {
            Self::draw_loop(
                &mut self.deck,
                &mut self.discard,
                &mut self.rng,
                &mut self.dealer,
            )?;
        }

        Ok(())
    }

    /// Records the settled state of one player's turn.
    fn turn_result(&self, index: usize) -> TurnResult {
        let player = &self.players[index];
        TurnResult {
            nickname: player.nickname().to_string(),
            player_cards: player.cards().to_vec(),
            player_value: player.value(),
            player_busted: player.is_busted(),
            dealer_cards: self.dealer.cards().to_vec(),
            dealer_value: self.dealer.value(),
            dealer_busted: self.dealer.is_busted(),
            winner: compare_hands(player, &self.dealer),
        }
    }

    /// Plays the given number of rounds and returns one result per round.
    ///
    /// Each round discards every player's previous hand, then plays each
    /// player in construction order: the player draws, the dealer's hand is
    /// reset and (unless the player already busted or won naturally) played
    /// out, and the two hands are compared.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck is ever exhausted
    /// mid-deal, which cannot happen for supported player counts.
    pub fn play_rounds(&mut self, rounds: usize) -> Result<Vec<RoundResult>, DealError> {
        self.recycle_and_shuffle();

        let mut results = Vec::with_capacity(rounds);
        for round in 1..=rounds {
            debug!("starting round {round} of {rounds}");
            self.reshuffle_if_low();

            for player in &mut self.players {
                self.discard.extend(player.discard());
            }

            let mut turns = Vec::with_capacity(self.players.len());
            for index in 0..self.players.len() {
                self.play_out(index)?;
                turns.push(self.turn_result(index));
            }

            results.push(RoundResult { round, turns });
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::{Table, compare_hands};
    use crate::card::{Card, DECK_SIZE, Rank, Suit};
    use crate::hand::Hand;
    use crate::options::TableOptions;
    use crate::result::Winner;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new("test");
        for &rank in ranks {
            hand.add_card(Card::new(rank, Suit::Hearts));
        }
        hand
    }

    #[test]
    fn higher_standing_player_wins() {
        let player = hand_of(&[Rank::King, Rank::Seven]); // 20
        let dealer = hand_of(&[Rank::King, Rank::Five]); // 18
        assert_eq!(compare_hands(&player, &dealer), Winner::Player);
    }

    #[test]
    fn tie_goes_to_the_dealer() {
        let player = hand_of(&[Rank::King, Rank::Five]); // 18
        let dealer = hand_of(&[Rank::Nine, Rank::Nine]); // 18
        assert_eq!(compare_hands(&player, &dealer), Winner::Dealer);
    }

    #[test]
    fn busted_dealer_loses_to_a_standing_player() {
        let player = hand_of(&[Rank::Nine, Rank::Six]); // 15
        let dealer = hand_of(&[Rank::King, Rank::Queen]); // 26, bust
        assert_eq!(compare_hands(&player, &dealer), Winner::Player);
    }

    #[test]
    fn busted_player_loses_even_with_the_higher_value() {
        let player = hand_of(&[Rank::King, Rank::King]); // 26, bust
        let dealer = hand_of(&[Rank::King, Rank::Seven]); // 20
        assert_eq!(compare_hands(&player, &dealer), Winner::Dealer);
    }

    #[test]
    fn both_busted_goes_to_the_dealer() {
        let player = hand_of(&[Rank::King, Rank::Nine, Rank::Five]); // 27
        let dealer = hand_of(&[Rank::King, Rank::Queen]); // 26
        assert_eq!(compare_hands(&player, &dealer), Winner::Dealer);
    }

    #[test]
    fn zero_players_is_a_construction_error() {
        let result = Table::new(TableOptions::default().with_players(0), 1);
        assert!(result.is_err());
    }

    #[test]
    fn reshuffle_triggers_when_one_card_remains() {
        let mut table = Table::new(TableOptions::default(), 9).unwrap();

        while table.deck.len() > 1 {
            let card = table.deck.deal().expect("deck not empty");
            table.discard.push(card);
        }
        assert_eq!(table.deck_len(), 1);
        assert_eq!(table.discard_len(), DECK_SIZE - 1);

        table.reshuffle_if_low();
        assert_eq!(table.deck_len(), DECK_SIZE);
        assert_eq!(table.discard_len(), 0);
    }

    #[test]
    fn reshuffle_does_not_trigger_above_one_card() {
        let mut table = Table::new(TableOptions::default(), 9).unwrap();

        let card = table.deck.deal().expect("deck not empty");
        table.discard.push(card);

        table.reshuffle_if_low();
        assert_eq!(table.deck_len(), DECK_SIZE - 1);
        assert_eq!(table.discard_len(), 1);
    }

    #[test]
    fn play_out_conserves_all_52_cards() {
        let mut table = Table::new(TableOptions::default(), 3).unwrap();

        for index in 0..table.players.len() {
            table.play_out(index).unwrap();

            let in_hands: usize = table.players.iter().map(Hand::len).sum::<usize>()
                + table.dealer.len();
            assert_eq!(
                table.deck_len() + table.discard_len() + in_hands,
                DECK_SIZE
            );
        }
    }

    #[test]
    fn dealer_sits_out_when_the_player_busts_or_wins() {
        let mut table = Table::new(TableOptions::default(), 11).unwrap();

        for index in 0..table.players.len() {
            table.play_out(index).unwrap();
            let player = &table.players[index];
            if player.is_busted() || player.is_natural_winner() {
                assert!(table.dealer.is_empty());
            } else {
                assert!(!table.dealer.is_empty());
            }
        }
    }
}
