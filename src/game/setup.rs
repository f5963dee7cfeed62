use alloc::string::{String, ToString};

use log::{debug, info};
use rand::Rng;

use crate::error::SetupError;
use crate::player::Player;

use super::{GameState, Scorepad, TurnState};

/// Name given to the only player of a quick-start round.
const QUICK_START_NAME: &str = "Player 1";

impl<R: Rng> Scorepad<R> {
    fn ensure_setup(&self) -> Result<(), SetupError> {
        if self.state == GameState::Setup {
            Ok(())
        } else {
            Err(SetupError::InvalidState)
        }
    }

    /// Adds a player to the end of the turn order.
    ///
    /// The name is trimmed; names need not be unique. Returns the new
    /// player's index.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has already started or the name is empty.
    pub fn add_player(&mut self, name: &str) -> Result<usize, SetupError> {
        self.ensure_setup()?;

        let name = name.trim();
        if name.is_empty() {
            debug!("rejected player: empty name");
            return Err(SetupError::EmptyName);
        }

        self.players.push(Player::new(name.to_string()));
        debug!("player `{name}` joined");
        Ok(self.players.len() - 1)
    }

    /// Removes the player at `index`.
    ///
    /// Returns the removed player.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has already started or the index is out of
    /// range.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, SetupError> {
        self.ensure_setup()?;

        if index >= self.players.len() {
            return Err(SetupError::PlayerNotFound);
        }

        let player = self.players.remove(index);
        debug!("player `{}` left", player.name());
        Ok(player)
    }

    /// Starts a round with the players added so far.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has already started or no players have
    /// joined.
    pub fn start_round(&mut self) -> Result<TurnState, SetupError> {
        self.ensure_setup()?;

        if self.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        self.current = 0;
        self.reset_turn();
        self.state = GameState::Playing;

        info!("round started with {} player(s)", self.players.len());
        Ok(self.turn_state())
    }

    /// Replaces the roster with a single player and starts a round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has already started.
    pub fn quick_start(&mut self) -> Result<TurnState, SetupError> {
        self.ensure_setup()?;

        self.players.clear();
        self.players.push(Player::new(String::from(QUICK_START_NAME)));
        self.start_round()
    }

    /// Discards every player and returns to setup.
    ///
    /// Unlike [`Scorepad::play_again`], this forgets the players themselves
    /// along with any series totals.
    pub fn reset_group(&mut self) {
        self.players.clear();
        self.current = 0;
        self.reset_turn();
        self.state = GameState::Setup;
        info!("group reset");
    }
}
