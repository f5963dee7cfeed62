//! Game state types.

use core::fmt;

use crate::die::HAND_SIZE;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Players are being added or removed.
    Setup,
    /// A round is in progress.
    Playing,
    /// Every player has filled every category.
    RoundOver,
}

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// No roll has been made this turn.
    AwaitingRoll,
    /// At least one roll made and rolls remain.
    RollingAllowed,
    /// No rolls remain; a category must be chosen.
    MustScore,
}

/// Snapshot of the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    /// Index of the player to move.
    pub player_index: usize,
    /// Rolls remaining this turn.
    pub rolls_left: u8,
    /// Die faces (0 = not rolled).
    pub dice: [u8; HAND_SIZE],
    /// Held flags aligned with `dice`.
    pub held: [bool; HAND_SIZE],
    /// Whether the round is over.
    pub round_over: bool,
    /// Phase of the turn, `None` outside a round.
    pub phase: Option<TurnPhase>,
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.round_over {
            return f.write_str("GAME OVER");
        }
        match self.phase {
            None => f.write_str("Add players to start"),
            Some(TurnPhase::AwaitingRoll) => f.write_str("Roll to start"),
            Some(TurnPhase::MustScore) => f.write_str("Select category"),
            Some(TurnPhase::RollingAllowed) if self.rolls_left == 1 => f.write_str("1 roll left"),
            Some(TurnPhase::RollingAllowed) => write!(f, "{} rolls left", self.rolls_left),
        }
    }
}
