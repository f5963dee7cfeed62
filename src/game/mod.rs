//! Scorepad engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::category::{Category, Row};
use crate::die::HAND_SIZE;
use crate::hand::Hand;
use crate::options::ScorepadOptions;
use crate::player::Player;
use crate::result::Totals;
use crate::scoresheet::Scoresheet;

mod actions;
mod round;
mod setup;
pub mod state;

pub use state::{GameState, TurnPhase, TurnState};

/// A scorepad that manages the roster, the dice of the current turn, and the
/// round flow.
///
/// Every transition takes `&mut self` and either completes or is rejected
/// with an error, leaving the scorepad untouched. Use [`ScorepadOptions`] to
/// configure rolls per turn, the upper bonus, series, and manual dice.
///
/// The die source is any [`Rng`]; [`Scorepad::new`] seeds a [`ChaCha8Rng`].
#[derive(Debug, Clone)]
pub struct Scorepad<R = ChaCha8Rng> {
    /// Scorepad options.
    options: ScorepadOptions,
    /// Current game state.
    state: GameState,
    /// Players in turn order.
    players: Vec<Player>,
    /// Index of the player to move.
    current: usize,
    /// Rolls remaining this turn.
    rolls_left: u8,
    /// Dice of the current turn.
    hand: Hand,
    /// Die source.
    rng: R,
}

impl Scorepad {
    /// Creates a new scorepad with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use yzpad::{GameState, Scorepad, ScorepadOptions};
    ///
    /// let pad = Scorepad::new(ScorepadOptions::default(), 42);
    /// assert_eq!(pad.state(), GameState::Setup);
    /// ```
    #[must_use]
    pub fn new(options: ScorepadOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scorepad<R> {
    /// Creates a new scorepad drawing dice from `rng`.
    ///
    /// A `rolls_per_turn` of zero is treated as one.
    #[must_use]
    pub const fn with_rng(mut options: ScorepadOptions, rng: R) -> Self {
        if options.rolls_per_turn == 0 {
            options.rolls_per_turn = 1;
        }
        Self {
            options,
            state: GameState::Setup,
            players: Vec::new(),
            current: 0,
            rolls_left: options.rolls_per_turn,
            hand: Hand::new(),
            rng,
        }
    }

    /// Clears the dice and restores the rolls for a fresh turn.
    fn reset_turn(&mut self) {
        self.hand.clear();
        self.rolls_left = self.options.rolls_per_turn;
    }

    /// Returns the scorepad options.
    pub const fn options(&self) -> &ScorepadOptions {
        &self.options
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the round is over.
    pub fn is_round_over(&self) -> bool {
        self.state == GameState::RoundOver
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the index of the player to move.
    pub const fn current_player_index(&self) -> usize {
        self.current
    }

    /// Returns the player to move.
    ///
    /// Returns `None` outside a round.
    pub fn current_player(&self) -> Option<&Player> {
        if self.state == GameState::Playing {
            self.players.get(self.current)
        } else {
            None
        }
    }

    /// Returns the rolls remaining this turn.
    pub const fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    /// Returns a copy of the current hand.
    pub const fn hand(&self) -> Hand {
        self.hand
    }

    /// Returns the die faces of the current hand (0 = not rolled).
    pub const fn dice(&self) -> [u8; HAND_SIZE] {
        self.hand.dice()
    }

    /// Returns the held flags of the current hand.
    pub const fn held(&self) -> [bool; HAND_SIZE] {
        self.hand.held()
    }

    /// Returns the phase of the current turn, or `None` outside a round.
    ///
    /// A turn whose dice were set by hand before any roll is already
    /// `RollingAllowed`.
    pub fn phase(&self) -> Option<TurnPhase> {
        if !matches!(self.state, GameState::Playing) {
            return None;
        }
        if self.rolls_left == 0 {
            Some(TurnPhase::MustScore)
        } else if self.rolls_left >= self.options.rolls_per_turn && self.hand.is_unrolled() {
            Some(TurnPhase::AwaitingRoll)
        } else {
            Some(TurnPhase::RollingAllowed)
        }
    }

    /// Returns a snapshot of the current turn.
    pub fn turn_state(&self) -> TurnState {
        TurnState {
            player_index: self.current,
            rolls_left: self.rolls_left,
            dice: self.hand.dice(),
            held: self.hand.held(),
            round_over: matches!(self.state, GameState::RoundOver),
            phase: self.phase(),
        }
    }

    /// Returns the scoresheet of the player at `index`.
    pub fn scoresheet(&self, index: usize) -> Option<&Scoresheet> {
        self.players.get(index).map(Player::scoresheet)
    }

    /// Returns the derived totals of the player at `index`.
    pub fn totals(&self, index: usize) -> Option<Totals> {
        self.players.get(index).map(|p| p.totals(&self.options))
    }

    /// Returns the value printed in `row` for the player at `index`.
    ///
    /// Returns `None` if the player is not found, the category has not been
    /// played, or the row is the series total and series are disabled.
    pub fn row_value(&self, index: usize, row: Row) -> Option<u32> {
        let player = self.players.get(index)?;
        let totals = player.totals(&self.options);
        match row {
            Row::Category(category) => player.scoresheet().get(category).map(u32::from),
            Row::Subtotal => Some(totals.subtotal),
            Row::Bonus => Some(totals.bonus),
            Row::UpperTotal => Some(totals.upper_total),
            Row::LowerTotal => Some(totals.lower_total),
            Row::GrandTotal => Some(totals.grand_total),
            Row::SeriesTotal => totals.series_total,
        }
    }

    /// Returns whether `category` is still open for the player at `index`.
    pub fn is_open(&self, index: usize, category: Category) -> bool {
        self.scoresheet(index)
            .is_some_and(|sheet| !sheet.is_set(category))
    }
}
