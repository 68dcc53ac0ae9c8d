#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use tictactoe::{WebGame, calculate_winner, wasm_ready};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

fn squares(cells: &[Option<&str>]) -> JsValue {
    let array = Array::new();
    for cell in cells {
        match cell {
            Some(mark) => array.push(&JsValue::from_str(mark)),
            None => array.push(&JsValue::NULL),
        };
    }
    array.into()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn state_exposes_status_squares_and_moves() {
    let mut game = WebGame::new();
    for cell in [0, 1, 3, 4, 6] {
        game.click(cell).unwrap();
    }

    let state = game.state().unwrap();
    assert_eq!(get(&state, "status").as_string().unwrap(), "Winner: X");
    assert_eq!(get(&state, "winner").as_string().unwrap(), "X");

    let cells = Array::from(&get(&state, "squares"));
    assert_eq!(cells.length(), 9);
    assert_eq!(cells.get(6).as_string().unwrap(), "X");
    assert!(cells.get(8).is_null());

    let moves = Array::from(&get(&state, "moves"));
    assert_eq!(moves.length(), 6);
    assert_eq!(
        get(&moves.get(0), "label").as_string().unwrap(),
        "Go to game start"
    );
}

#[wasm_bindgen_test]
fn out_of_range_input_raises_instead_of_trapping() {
    let mut game = WebGame::new();

    assert!(game.click(9).is_err());
    assert!(game.jump_to(1).is_err());
    assert!(game.click(0).is_ok());
}

#[wasm_bindgen_test]
fn calculate_winner_reads_js_arrays() {
    let won = squares(&[Some("O"), None, Some("X"), None, Some("X"), None, Some("X"), None, Some("O")]);
    assert_eq!(calculate_winner(won).unwrap().as_string().unwrap(), "X");

    let open = squares(&[None; 9]);
    assert!(calculate_winner(open).unwrap().is_null());

    let short = squares(&[None; 8]);
    assert!(calculate_winner(short).is_err());
}
