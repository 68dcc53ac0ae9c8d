use tracing::{debug, info};

use crate::board::{NUM_CELLS, Snapshot, calculate_winner};
use crate::error::{GameError, Result};
use crate::types::{Mark, MoveEntry, ViewState};

/// Game history plus the step currently shown.
///
/// Transitions never mutate in place: [`GameState::play_move`] and
/// [`GameState::jump_to`] return a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Snapshot>,
    step: usize,
}

impl GameState {
    /// Creates a game with only the empty board in history.
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::empty()],
            step: 0,
        }
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    pub fn next_player(&self) -> Mark {
        Mark::for_step(self.step)
    }

    pub fn winner(&self) -> Option<Mark> {
        calculate_winner(self.current())
    }

    pub fn is_full(&self) -> bool {
        self.current().is_full()
    }

    /// Plays `cell` for the player to move.
    ///
    /// Returns an unchanged copy when the current board is already won or the
    /// cell is taken. Otherwise drops every snapshot after the current step
    /// and appends the new board.
    ///
    /// Panics when `cell` is not on the board.
    pub fn play_move(&self, cell: usize) -> Self {
        assert!(cell < NUM_CELLS, "cell index {cell} out of range");

        let current = self.current();
        if calculate_winner(current).is_some() || current.is_occupied(cell) {
            return self.clone();
        }

        let mark = self.next_player();
        let next = current.with_mark(cell, mark);

        let mut history = self.history[..=self.step].to_vec();
        history.push(next);
        let step = history.len() - 1;

        debug!(cell, %mark, step, history_len = history.len(), "move played");
        if let Some(winner) = calculate_winner(&next) {
            info!(%winner, step, "game won");
        }

        Self { history, step }
    }

    /// Moves the board to `step` without touching history.
    ///
    /// Panics when `step` is not in history.
    pub fn jump_to(&self, step: usize) -> Self {
        assert!(
            step < self.history.len(),
            "step {step} out of range (history has {} entries)",
            self.history.len()
        );

        debug!(from = self.step, to = step, "jumped in history");
        Self {
            history: self.history.clone(),
            step,
        }
    }

    /// `"Winner: X"` once someone has a line, `"Next player: O"` otherwise.
    /// A full board without a line keeps reporting the next player.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {winner}"),
            None => format!("Next player: {}", self.next_player()),
        }
    }

    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry {
                step,
                label: move_label(step),
                is_current: step == self.step,
            })
            .collect()
    }

    pub fn to_view(&self) -> ViewState {
        let current = self.current();
        ViewState {
            squares: current.cells().to_vec(),
            rows: current.rows(),
            status: self.status(),
            winner: self.winner(),
            next_player: self.next_player(),
            step: self.step,
            moves: self.move_list(),
        }
    }

    /// Validates a cell index received from the page.
    pub fn check_cell(&self, cell: usize) -> Result<usize> {
        if cell < NUM_CELLS {
            Ok(cell)
        } else {
            Err(GameError::CellOutOfRange(cell))
        }
    }

    /// Validates a history step received from the page.
    pub fn check_step(&self, step: usize) -> Result<usize> {
        if step < self.history.len() {
            Ok(step)
        } else {
            Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}
