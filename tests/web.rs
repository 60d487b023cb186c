#![cfg(target_arch = "wasm32")]

use blockdrop::BlockGame;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn options(seed: f64) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"seed".into(), &JsValue::from_f64(seed)).unwrap();
    Reflect::set(&obj, &"pointsPerRow".into(), &JsValue::from_f64(50.0)).unwrap();
    obj.into()
}

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn constructor_accepts_undefined_options() {
    let game = BlockGame::new(JsValue::UNDEFINED).unwrap();

    assert!(!game.is_game_over());
    assert_eq!(game.score(), 0);
}

#[wasm_bindgen_test]
fn state_exposes_board_and_active_block() {
    let game = BlockGame::new(options(7.0)).unwrap();
    let state = game.get_state().unwrap();

    assert_eq!(field(&state, "width").as_f64(), Some(10.0));
    assert_eq!(js_sys::Array::from(&field(&state, "board")).length(), 100);
    let active = field(&state, "active");
    assert_eq!(field(&active, "x").as_f64(), Some(3.0));
    assert_eq!(field(&active, "y").as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn drag_release_round_trip_reports_outcome() {
    let mut game = BlockGame::new(options(7.0)).unwrap();

    game.begin_drag();
    assert!(game.update_position(0, 6));
    let outcome = game.release_and_attempt_place().unwrap();

    assert_eq!(field(&outcome, "outcome").as_string().as_deref(), Some("placed"));
    assert!(game.is_occupied(0, 6).unwrap() || game.is_occupied(1, 6).unwrap());
    let state = game.get_state().unwrap();
    assert_eq!(field(&state, "pieces_placed").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn off_board_release_is_rejected() {
    let mut game = BlockGame::new(options(7.0)).unwrap();

    game.begin_drag();
    game.update_position(-5, -5);
    let outcome = game.release_and_attempt_place().unwrap();

    assert_eq!(field(&outcome, "outcome").as_string().as_deref(), Some("rejected"));
}

#[wasm_bindgen_test]
fn step_parses_direction_strings() {
    let mut game = BlockGame::new(options(7.0)).unwrap();

    let outcome = game.step("down".into()).unwrap();
    assert_eq!(field(&outcome, "outcome").as_string().as_deref(), Some("moved"));
    assert!(game.step("sideways".into()).is_err());
}

#[wasm_bindgen_test]
fn out_of_bounds_occupancy_read_throws() {
    let game = BlockGame::new(JsValue::UNDEFINED).unwrap();

    assert!(game.is_occupied(10, 0).is_err());
}
