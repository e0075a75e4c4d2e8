//! Table configuration options and boundary validation.

use crate::error::ConfigError;
use crate::hand::DEFAULT_STAND_THRESHOLD;

/// Configuration options for a card table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_players(5)
///     .with_stand_threshold(16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of player hands at the table.
    pub players: usize,
    /// Stand threshold applied to every player hand.
    pub stand_threshold: u8,
    /// Stand threshold applied to the dealer's hand.
    pub dealer_stand_threshold: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            players: 3,
            stand_threshold: DEFAULT_STAND_THRESHOLD,
            dealer_stand_threshold: DEFAULT_STAND_THRESHOLD,
        }
    }
}

impl TableOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(7);
    /// assert_eq!(options.players, 7);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the stand threshold for player hands.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_threshold(16);
    /// assert_eq!(options.stand_threshold, 16);
    /// ```
    #[must_use]
    pub const fn with_stand_threshold(mut self, threshold: u8) -> Self {
        self.stand_threshold = threshold;
        self
    }

    /// Sets the stand threshold for the dealer's hand.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stand_threshold(15);
    /// assert_eq!(options.dealer_stand_threshold, 15);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand_threshold(mut self, threshold: u8) -> Self {
        self.dealer_stand_threshold = threshold;
        self
    }
}

/// Player counts accepted at the boundary. 52 parses but is rejected with
/// [`ConfigError::TooFewCards`] because a full table leaves nothing to deal.
const ALLOWED_PLAYER_COUNTS: [usize; 8] = [1, 2, 3, 4, 5, 6, 7, 52];

/// A validated run configuration for the boundary layer.
///
/// ```
/// use cardtable::RunConfig;
///
/// let config = RunConfig::new(Some(3), None).unwrap();
/// assert_eq!(config.rounds, 3);
/// assert_eq!(config.players, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of rounds to play.
    pub rounds: usize,
    /// Number of players at the table.
    pub players: usize,
}

impl RunConfig {
    /// Validates a round count and player count, applying the defaults of
    /// 1 round and 3 players when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRounds`] when the round count is not in
    /// 1..=5, [`ConfigError::InvalidPlayers`] when the player count is not
    /// one of {1, 2, 3, 4, 5, 6, 7, 52}, and [`ConfigError::TooFewCards`]
    /// for the degenerate 52-player table.
    pub fn new(rounds: Option<usize>, players: Option<usize>) -> Result<Self, ConfigError> {
        let rounds = rounds.unwrap_or(1);
        let players = players.unwrap_or(3);

        if !(1..=5).contains(&rounds) {
            return Err(ConfigError::InvalidRounds);
        }
        if !ALLOWED_PLAYER_COUNTS.contains(&players) {
            return Err(ConfigError::InvalidPlayers);
        }
        if players == 52 {
            return Err(ConfigError::TooFewCards);
        }

        Ok(Self { rounds, players })
    }
}
