use alloc::vec::Vec;

use log::{debug, info};
use rand::Rng;

use crate::category::Category;
use crate::error::{RoundError, ScoreError};
use crate::result::ScoreAssigned;
use crate::scoring::score;

use super::{GameState, Scorepad};

impl<R: Rng> Scorepad<R> {
    fn ensure_can_score(&self, player_index: usize) -> Result<(), ScoreError> {
        if self.state != GameState::Playing {
            return Err(ScoreError::InvalidState);
        }

        if player_index >= self.players.len() {
            return Err(ScoreError::PlayerNotFound);
        }

        if player_index != self.current {
            return Err(ScoreError::NotYourTurn);
        }

        if !self.hand.is_established() {
            return Err(ScoreError::HandNotRolled);
        }

        Ok(())
    }

    fn all_players_done(&self) -> bool {
        self.players.iter().all(|p| p.scoresheet().is_complete())
    }

    /// Scores the current hand in `category` for the player at
    /// `player_index`, then ends the round or passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the player cannot be
    /// found, it is not the player's turn, some dice are still unrolled, or
    /// the category was already scored this round.
    pub fn select_category(
        &mut self,
        category: Category,
        player_index: usize,
    ) -> Result<ScoreAssigned, ScoreError> {
        if let Err(err) = self.ensure_can_score(player_index) {
            debug!("select {category} by player {player_index} rejected: {err}");
            return Err(err);
        }

        let points = score(category, &self.hand);
        if !self.players[player_index]
            .scoresheet_mut()
            .set(category, points)
        {
            debug!("select {category} by player {player_index} rejected: already scored");
            return Err(ScoreError::AlreadyScored);
        }
        debug!("player {player_index} scored {points} in {category}");

        if self.all_players_done() {
            self.state = GameState::RoundOver;
            info!("round over");
            return Ok(ScoreAssigned {
                player_index,
                category,
                points,
                round_over: true,
                next_player: None,
            });
        }

        self.current = (self.current + 1) % self.players.len();
        self.reset_turn();

        Ok(ScoreAssigned {
            player_index,
            category,
            points,
            round_over: false,
            next_player: Some(self.current),
        })
    }

    /// Starts another round with the same players.
    ///
    /// With series enabled, each player's grand total is folded into their
    /// series before the scoresheets are cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round is not over.
    pub fn play_again(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::RoundOver {
            return Err(RoundError::RoundNotOver);
        }

        for player in &mut self.players {
            player.finish_round(&self.options);
            if self.options.series {
                info!("series for `{}` now {}", player.name(), player.series());
            }
        }

        self.current = 0;
        self.reset_turn();
        self.state = GameState::Playing;
        Ok(())
    }

    /// Lists what each open category would score with the current hand.
    ///
    /// Empty unless `player_index` is the player to move and every die shows
    /// a face.
    pub fn preview(&self, player_index: usize) -> Vec<(Category, u16)> {
        if self.ensure_can_score(player_index).is_err() {
            return Vec::new();
        }

        self.players[player_index]
            .scoresheet()
            .open_categories()
            .map(|category| (category, score(category, &self.hand)))
            .collect()
    }
}
