use serde::Deserialize;

use crate::board::BOARD_SIZE;
use crate::error::EngineError;
use crate::types::Position;

pub const DEFAULT_POINTS_PER_ROW: u32 = 100;
pub const DEFAULT_SPAWN: Position = Position { x: 3, y: 0 };

/// Session options. Every field is optional when deserialized from JS.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub points_per_row: u32,
    /// Where each new active block appears.
    pub spawn: Position,
    /// Fixed seed for the shape sequence; derived from the clock when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_row: DEFAULT_POINTS_PER_ROW,
            spawn: DEFAULT_SPAWN,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let range = 0..BOARD_SIZE as i32;
        if !range.contains(&self.spawn.x) || !range.contains(&self.spawn.y) {
            return Err(EngineError::InvalidConfig(format!(
                "spawn ({}, {}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board",
                self.spawn.x, self.spawn.y
            )));
        }
        Ok(())
    }
}
