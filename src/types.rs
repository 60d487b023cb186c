use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

/// Grid offset of a shape's top-left cell. May lie outside the board while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Keyboard step for the active block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Result of releasing the active block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlacementOutcome {
    Placed { rows_cleared: u32, score_delta: u32 },
    /// The block did not fit. Board, score and active block are unchanged.
    Rejected,
}

/// Result of a keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Moved,
    /// Sideways step into a wall or filled cell; nothing changed.
    Blocked,
    /// Downward step was blocked, so the block was committed where it stood.
    Placed { rows_cleared: u32, score_delta: u32 },
}

/// Notifications queued for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RowsCleared { count: u32, score: u32 },
    GameOver { final_score: u32 },
}

/// The shape being positioned, as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub cells: Vec<Vec<u8>>,
    pub x: i32,
    pub y: i32,
    /// Contract: `true` iff releasing now would place the block.
    pub fits: bool,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major 0/1 cells, `width * height` long.
    pub board: Vec<u8>,
    pub width: u8,
    pub height: u8,
    /// CRC32 of `board`; unchanged value means nothing to redraw on the grid.
    pub board_id: u32,
    pub active: ActiveSnapshot,
    pub dragging: bool,
    pub score: u32,
    pub pieces_placed: u32,
    pub rows_cleared: u32,
    pub is_game_over: bool,
}

/// Summary handed out once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub final_score: u32,
    pub pieces_placed: u32,
    pub rows_cleared: u32,
    pub elapsed_ms: u64,
}
