use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod types;

use crate::board::{Snapshot, calculate_winner as winner_of};
use crate::game::GameState;
use crate::types::Cell;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Game handle held by the page. Every call replaces the inner state.
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console-panic")]
        console_error_panic_hook::set_once();

        Self {
            state: GameState::new(),
        }
    }

    /// Square click. Taken squares and clicks after a win are ignored.
    pub fn click(&mut self, cell: usize) -> Result<(), JsError> {
        let cell = self.state.check_cell(cell)?;
        self.state = self.state.play_move(cell);
        Ok(())
    }

    /// Move-list click.
    pub fn jump_to(&mut self, step: usize) -> Result<(), JsError> {
        let step = self.state.check_step(step)?;
        self.state = self.state.jump_to(step);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    /// Current `ViewState` as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.to_view())
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WebGame {
    pub fn game_state(&self) -> &GameState {
        &self.state
    }
}

/// Winner of a JS array of 9 cells (`null`, `"X"` or `"O"`), or `null`.
#[wasm_bindgen]
pub fn calculate_winner(squares: JsValue) -> Result<JsValue, JsValue> {
    let cells: Vec<Cell> = serde_wasm_bindgen::from_value(squares)?;
    let snapshot = Snapshot::from_cells(&cells).map_err(JsError::from)?;
    to_js(&winner_of(&snapshot))
}

// Empty cells and a missing winner must reach JS as `null`, not `undefined`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
