use thiserror::Error;

use crate::board::NUM_CELLS;

/// Errors raised when input from the page does not fit the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {0} out of range (expected < {max})", max = NUM_CELLS)]
    CellOutOfRange(usize),

    #[error("step {step} out of range (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },

    #[error("snapshot must have {expected} cells, got {0}", expected = NUM_CELLS)]
    SnapshotLength(usize),
}

pub type Result<T> = std::result::Result<T, GameError>;
