//! Error types for scorepad operations.
//!
//! Every error is recoverable: the rejected operation leaves the scorepad
//! unchanged. [`ErrorKind`] groups the variants into bad input and actions
//! attempted outside the state that allows them.

use thiserror::Error;

/// Broad classification of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A bad index, name, face, or key.
    InvalidInput,
    /// The action is not allowed in the current state.
    IllegalTransition,
}

/// Errors that can occur while managing the roster or starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player name is empty after trimming.
    #[error("player name is empty")]
    EmptyName,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// The roster can only change before a round starts.
    #[error("invalid game state for setup")]
    InvalidState,
}

/// Errors that can occur when rolling the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// No round is in progress.
    #[error("invalid game state for rolling")]
    InvalidState,
    /// All rolls for this turn are used.
    #[error("no rolls left this turn")]
    NoRollsLeft,
}

/// Errors that can occur when holding or releasing a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HoldError {
    /// No round is in progress.
    #[error("invalid game state for holding dice")]
    InvalidState,
    /// Dice cannot be held before the first roll of the turn.
    #[error("dice cannot be held before the first roll")]
    NotRolled,
    /// Die index out of range.
    #[error("die not found")]
    DieNotFound,
}

/// Errors that can occur when adjusting a die by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdjustError {
    /// No round is in progress.
    #[error("invalid game state for adjusting dice")]
    InvalidState,
    /// Manual dice are disabled at this table.
    #[error("manual dice are disabled")]
    NotAllowed,
    /// Die index out of range.
    #[error("die not found")]
    DieNotFound,
    /// Held dice cannot be changed.
    #[error("die is held")]
    DieHeld,
    /// The adjustment does not produce a face in 1..=6.
    #[error("invalid die face")]
    InvalidFace,
}

/// Errors that can occur when scoring a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// No round is in progress.
    #[error("invalid game state for scoring")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Some dice have not been rolled yet.
    #[error("hand has not been rolled")]
    HandNotRolled,
    /// The category was already scored this round.
    #[error("category already scored")]
    AlreadyScored,
}

/// Errors that can occur when starting another round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not finished.
    #[error("round is not over")]
    RoundNotOver,
}

/// Errors that can occur when parsing a category key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryParseError {
    /// The key does not name a scorable category.
    #[error("unknown category")]
    UnknownCategory,
}

impl SetupError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::EmptyName | Self::PlayerNotFound => ErrorKind::InvalidInput,
            Self::NoPlayers | Self::InvalidState => ErrorKind::IllegalTransition,
        }
    }
}

impl RollError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::IllegalTransition
    }
}

impl HoldError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::DieNotFound => ErrorKind::InvalidInput,
            Self::InvalidState | Self::NotRolled => ErrorKind::IllegalTransition,
        }
    }
}

impl AdjustError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::DieNotFound | Self::InvalidFace => ErrorKind::InvalidInput,
            Self::InvalidState | Self::NotAllowed | Self::DieHeld => ErrorKind::IllegalTransition,
        }
    }
}

impl ScoreError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::PlayerNotFound => ErrorKind::InvalidInput,
            Self::InvalidState | Self::NotYourTurn | Self::HandNotRolled | Self::AlreadyScored => {
                ErrorKind::IllegalTransition
            }
        }
    }
}

impl RoundError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::IllegalTransition
    }
}

impl CategoryParseError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}
