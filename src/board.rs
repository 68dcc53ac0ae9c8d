use std::fmt;

use crate::error::{GameError, Result};
use crate::types::{Cell, Mark};

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Winning triples, checked in this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One immutable board state, cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    cells: [Cell; NUM_CELLS],
}

impl Snapshot {
    /// Creates the all-empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from cells coming from outside the crate.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; NUM_CELLS] = cells
            .try_into()
            .map_err(|_| GameError::SnapshotLength(cells.len()))?;
        Ok(Self { cells })
    }

    /// Returns the cell at `pos`.
    ///
    /// Panics when `pos` is not on the board.
    pub fn get(&self, pos: usize) -> Cell {
        assert!(pos < NUM_CELLS, "cell index {pos} out of range");
        self.cells[pos]
    }

    pub fn is_occupied(&self, pos: usize) -> bool {
        self.get(pos).is_some()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns a copy with `pos` set to `mark`. `self` is left untouched.
    pub fn with_mark(&self, pos: usize, mark: Mark) -> Self {
        assert!(pos < NUM_CELLS, "cell index {pos} out of range");
        let mut next = *self;
        next.cells[pos] = Some(mark);
        next
    }

    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Splits the board into its three rows, top first.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(BOARD_SIZE)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    /// Number of cells that differ from `other`.
    pub fn diff_count(&self, other: &Snapshot) -> usize {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, " ")?,
                }
            }
        }
        Ok(())
    }
}

/// Returns the mark of the first uniformly occupied triple in [`LINES`].
/// A full board without a line is not reported as anything but `None`.
pub fn calculate_winner(snapshot: &Snapshot) -> Option<Mark> {
    let cells = snapshot.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(mark) if cells[b] == Some(mark) && cells[c] == Some(mark) => Some(mark),
        _ => None,
    })
}
