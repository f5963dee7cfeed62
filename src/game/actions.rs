use log::debug;
use rand::Rng;

use crate::die::{DieAdjust, HAND_SIZE};
use crate::error::{AdjustError, HoldError, RollError};
use crate::hand::Hand;

use super::{GameState, Scorepad};

impl<R: Rng> Scorepad<R> {
    /// Returns whether the current turn has rolled at least once.
    fn has_rolled(&self) -> bool {
        self.rolls_left < self.options.rolls_per_turn
    }

    /// Rolls every die that is not held.
    ///
    /// Returns the hand after the roll.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or no rolls are left.
    pub fn roll(&mut self) -> Result<Hand, RollError> {
        if self.state != GameState::Playing {
            return Err(RollError::InvalidState);
        }

        if self.rolls_left == 0 {
            debug!("roll rejected: no rolls left");
            return Err(RollError::NoRollsLeft);
        }

        self.hand.roll(&mut self.rng);
        self.rolls_left -= 1;

        debug!(
            "player {} rolled {} ({} left)",
            self.current, self.hand, self.rolls_left
        );
        Ok(self.hand)
    }

    /// Holds or releases the die at `index`.
    ///
    /// Returns the new held flag.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the index is out of range,
    /// or the turn has not rolled yet.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, HoldError> {
        if self.state != GameState::Playing {
            return Err(HoldError::InvalidState);
        }

        if index >= HAND_SIZE {
            return Err(HoldError::DieNotFound);
        }

        if !self.has_rolled() {
            debug!("hold rejected: die {index} before first roll");
            return Err(HoldError::NotRolled);
        }

        self.hand.toggle_hold(index).ok_or(HoldError::DieNotFound)
    }

    /// Sets or steps the face of the die at `index` by hand.
    ///
    /// This transcribes a physically rolled hand and does not use up a roll.
    /// Returns the new face.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, manual dice are disabled,
    /// the index is out of range, the die is held, or the adjustment does not
    /// produce a face in 1..=6.
    pub fn adjust_die(&mut self, index: usize, adjust: DieAdjust) -> Result<u8, AdjustError> {
        if self.state != GameState::Playing {
            return Err(AdjustError::InvalidState);
        }

        if !self.options.manual_dice {
            return Err(AdjustError::NotAllowed);
        }

        let face = self.hand.die(index).ok_or(AdjustError::DieNotFound)?;

        if self.hand.is_held(index) {
            debug!("adjust rejected: die {index} is held");
            return Err(AdjustError::DieHeld);
        }

        let face = adjust.apply(face).ok_or(AdjustError::InvalidFace)?;
        self.hand
            .set_die(index, face)
            .ok_or(AdjustError::DieNotFound)?;

        Ok(face)
    }
}
