use std::fmt;

use serde::{Deserialize, Serialize};

/// A player's symbol. Serializes as `"X"` / `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark to play after `step` moves: X on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One cell of the board. `None` is empty.
pub type Cell = Option<Mark>;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub step: usize,
    pub label: String,
    /// `true` for the step currently shown on the board.
    pub is_current: bool,
}

/// Public view state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Contract: exactly 9 cells, row-major, `null` for empty.
    pub squares: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
    pub status: String,
    pub winner: Option<Mark>,
    pub next_player: Mark,
    pub step: usize,
    pub moves: Vec<MoveEntry>,
}
