use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use web_time::{Instant, SystemTime, UNIX_EPOCH};

use crate::board::{BOARD_SIZE, Board};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::shape::{Shape, all_shapes, random_shape};
use crate::types::{
    ActiveSnapshot, Direction, GameEvent, GameResult, GameState, PlacementOutcome, Position,
    StepOutcome,
};

/// The shape currently being positioned and where its top-left cell sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveBlock {
    shape: &'static Shape,
    pos: Position,
}

impl ActiveBlock {
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn position(&self) -> Position {
        self.pos
    }
}

/// Returns `true` when no catalog shape fits at any cell of `board`.
///
/// Exhaustive over cells and shapes; callers run it once after each spawn
/// rather than per frame.
pub fn detect_game_over(board: &Board) -> bool {
    let size = BOARD_SIZE as i32;
    !(0..size).any(|row| {
        (0..size).any(|col| {
            all_shapes()
                .iter()
                .any(|shape| board.can_place(shape, Position::new(col, row)))
        })
    })
}

/// One play session: board, score and the active block.
pub struct GameInstance {
    board: Board,
    active: ActiveBlock,
    score: u32,
    dragging: bool,
    is_game_over: bool,
    pieces_placed: u32,
    rows_cleared: u32,
    events: Vec<GameEvent>,
    config: GameConfig,
    rng: StdRng,
    started_at: Instant,
}

impl GameInstance {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let active = ActiveBlock {
            shape: random_shape(&mut rng),
            pos: config.spawn,
        };
        debug!(seed, kind = ?active.shape.kind(), "session started");

        Ok(Self {
            board: Board::new(),
            active,
            score: 0,
            dragging: false,
            is_game_over: false,
            pieces_placed: 0,
            rows_cleared: 0,
            events: Vec::new(),
            config,
            rng,
            started_at: Instant::now(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActiveBlock {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// `(width, height)` of the board.
    pub fn dimensions(&self) -> (u8, u8) {
        (self.board.width(), self.board.height())
    }

    /// Whether releasing at the current position would place the block.
    pub fn active_fits(&self) -> bool {
        self.board.can_place(self.active.shape, self.active.pos)
    }

    pub fn begin_drag(&mut self) {
        if !self.is_game_over {
            self.dragging = true;
        }
    }

    /// Moves the active block while a drag is in progress.
    /// The position is not clamped. Returns `false` when no drag is active.
    pub fn update_position(&mut self, x: i32, y: i32) -> bool {
        if !self.dragging {
            return false;
        }
        self.active.pos = Position::new(x, y);
        true
    }

    /// Ends the drag and tries to commit the active block where it stands.
    pub fn release_and_attempt_place(&mut self) -> Result<PlacementOutcome, EngineError> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }
        self.dragging = false;
        self.commit_active()
    }

    /// Moves the active block one cell. A blocked downward step commits it instead.
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome, EngineError> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }

        let (dx, dy) = direction.delta();
        let next = self.active.pos.offset(dx, dy);
        if self.board.can_place(self.active.shape, next) {
            self.active.pos = next;
            return Ok(StepOutcome::Moved);
        }
        if direction != Direction::Down {
            return Ok(StepOutcome::Blocked);
        }

        Ok(match self.commit_active()? {
            PlacementOutcome::Placed {
                rows_cleared,
                score_delta,
            } => StepOutcome::Placed {
                rows_cleared,
                score_delta,
            },
            PlacementOutcome::Rejected => StepOutcome::Blocked,
        })
    }

    /// Starts a fresh session on the same config. The shape sequence continues.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.dragging = false;
        self.is_game_over = false;
        self.pieces_placed = 0;
        self.rows_cleared = 0;
        self.events.clear();
        self.started_at = Instant::now();
        info!("session restarted");
        self.spawn_next();
    }

    /// Hands over queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            width: self.board.width(),
            height: self.board.height(),
            board_id: self.board.fingerprint(),
            active: ActiveSnapshot {
                kind: self.active.shape.kind(),
                cells: self.active.shape.rows().to_vec(),
                x: self.active.pos.x,
                y: self.active.pos.y,
                fits: self.active_fits(),
            },
            dragging: self.dragging,
            score: self.score,
            pieces_placed: self.pieces_placed,
            rows_cleared: self.rows_cleared,
            is_game_over: self.is_game_over,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        GameResult {
            final_score: self.score,
            pieces_placed: self.pieces_placed,
            rows_cleared: self.rows_cleared,
            elapsed_ms: self.started_at.elapsed().as_millis() as u64,
        }
    }

    // Commit, clear and respawn run back to back so no caller sees a half-applied move.
    fn commit_active(&mut self) -> Result<PlacementOutcome, EngineError> {
        let ActiveBlock { shape, pos } = self.active;
        match self.board.place(shape, pos) {
            Ok(()) => {}
            Err(EngineError::InvalidPlacement { x, y }) => {
                debug!(kind = ?shape.kind(), x, y, "placement rejected");
                return Ok(PlacementOutcome::Rejected);
            }
            Err(err) => return Err(err),
        }
        self.pieces_placed += 1;
        debug!(kind = ?shape.kind(), x = pos.x, y = pos.y, "block placed");

        let cleared = self.board.clear_full_rows();
        let rows_cleared = cleared.count();
        let score_delta = rows_cleared.saturating_mul(self.config.points_per_row);
        if !cleared.is_empty() {
            self.score = self.score.saturating_add(score_delta);
            self.rows_cleared += rows_cleared;
            info!(rows = ?cleared.rows, score = self.score, "rows cleared");
            self.events.push(GameEvent::RowsCleared {
                count: rows_cleared,
                score: self.score,
            });
        }

        self.spawn_next();

        Ok(PlacementOutcome::Placed {
            rows_cleared,
            score_delta,
        })
    }

    fn spawn_next(&mut self) {
        self.active = ActiveBlock {
            shape: random_shape(&mut self.rng),
            pos: self.config.spawn,
        };
        debug!(kind = ?self.active.shape.kind(), "spawned block");

        if detect_game_over(&self.board) {
            self.is_game_over = true;
            self.dragging = false;
            info!(final_score = self.score, "game over");
            self.events.push(GameEvent::GameOver {
                final_score: self.score,
            });
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.board = board;
        self.is_game_over = false;
        self.events.clear();
    }

    #[cfg(test)]
    fn set_active_for_test(&mut self, kind: crate::shape::ShapeKind, pos: Position) {
        self.active = ActiveBlock {
            shape: crate::shape::shape_of(kind),
            pos,
        };
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
