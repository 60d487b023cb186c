use thiserror::Error;

/// Failures surfaced by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A cell query or write fell outside the board.
    #[error("cell ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },
    /// The shape does not fit at the requested position.
    #[error("shape does not fit at ({x}, {y})")]
    InvalidPlacement { x: i32, y: i32 },
    /// The session has ended; only a restart is accepted.
    #[error("game is already over")]
    GameOver,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
