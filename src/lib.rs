use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod shape;
pub mod types;

use crate::config::GameConfig;
use crate::game::GameInstance;
use crate::types::Direction;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Browser handle around one [`GameInstance`].
///
/// Structured values cross the boundary as plain JS objects; engine errors
/// surface as thrown `Error`s.
#[wasm_bindgen]
pub struct BlockGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl BlockGame {
    /// `options` may be `undefined` or a partial `{ pointsPerRow, spawn, seed }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<BlockGame, JsError> {
        let config: GameConfig = if options.is_undefined() || options.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Ok(Self {
            inner: GameInstance::new(config)?,
        })
    }

    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self) {
        self.inner.begin_drag();
    }

    #[wasm_bindgen(js_name = updatePosition)]
    pub fn update_position(&mut self, x: i32, y: i32) -> bool {
        self.inner.update_position(x, y)
    }

    #[wasm_bindgen(js_name = releaseAndAttemptPlace)]
    pub fn release_and_attempt_place(&mut self) -> Result<JsValue, JsError> {
        let outcome = self.inner.release_and_attempt_place()?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    /// `direction` is one of `"left"`, `"right"`, `"down"`.
    pub fn step(&mut self, direction: JsValue) -> Result<JsValue, JsError> {
        let direction: Direction = serde_wasm_bindgen::from_value(direction)?;
        let outcome = self.inner.step(direction)?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    #[wasm_bindgen(js_name = getResult)]
    pub fn get_result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }

    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.drain_events())?)
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    #[wasm_bindgen(js_name = isOccupied)]
    pub fn is_occupied(&self, x: i32, y: i32) -> Result<bool, JsError> {
        Ok(self.inner.board().is_occupied(x, y)?)
    }

    pub fn score(&self) -> u32 {
        self.inner.score()
    }
}
