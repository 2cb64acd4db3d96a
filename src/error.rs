//! Error taxonomy for the engine boundary

use thiserror::Error;

use crate::board::Move;

/// Everything that can go wrong at the engine boundary.
///
/// `OutOfBounds`, `InvalidMove` and `GameOver` are recoverable caller
/// errors: the engine state is unchanged and the driver decides how to
/// re-prompt. `IllegalState` reports a broken engine invariant; it must be
/// propagated, never swallowed or retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A position outside the 8x8 grid was queried
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    /// The proposed move is not in the current legal-move set
    #[error("move {0} is not legal in the current position")]
    InvalidMove(Move),

    /// A move was proposed after the match was decided
    #[error("the game is already over")]
    GameOver,

    /// An engine invariant was violated; this is a bug, not a user error
    #[error("engine invariant violated: {0}")]
    IllegalState(String),
}
