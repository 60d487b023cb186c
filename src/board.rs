use crate::error::EngineError;
use crate::shape::Shape;
use crate::types::Position;

pub const BOARD_SIZE: usize = 10;
const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
const ROW_MASK: u128 = (1u128 << BOARD_SIZE) - 1;

/// Rows removed by one call to [`Board::clear_full_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Original indices of the cleared rows, top to bottom.
    pub rows: Vec<u8>,
}

impl LineClear {
    pub fn count(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 10x10 occupancy grid stored as a single bitboard.
/// Bit `y * 10 + x` is set when cell (x, y) is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: u128,
}

impl Board {
    pub fn new() -> Self {
        Self { cells: 0 }
    }

    /// Builds a board from 0/1 rows, top row first. Any non-zero value counts as filled.
    pub fn from_rows(rows: &[[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = 0u128;
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    cells |= bit(y * BOARD_SIZE + x);
                }
            }
        }
        Self { cells }
    }

    pub fn width(&self) -> u8 {
        BOARD_SIZE as u8
    }

    pub fn height(&self) -> u8 {
        BOARD_SIZE as u8
    }

    /// Returns whether (x, y) is filled. Reads outside the board are an error.
    pub fn is_occupied(&self, x: i32, y: i32) -> Result<bool, EngineError> {
        let idx = index(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        Ok(self.cells & bit(idx) != 0)
    }

    pub fn set_occupied(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        let idx = index(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        self.cells |= bit(idx);
        Ok(())
    }

    pub fn clear(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        let idx = index(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        self.cells &= !bit(idx);
        Ok(())
    }

    /// Checks that every filled cell of `shape` lands on an empty in-bounds cell
    /// when its top-left corner sits at `pos`. All four edges are enforced.
    pub fn can_place(&self, shape: &Shape, pos: Position) -> bool {
        shape.cells().iter().all(|&(r, c)| {
            match index(pos.x + c as i32, pos.y + r as i32) {
                Some(idx) => self.cells & bit(idx) == 0,
                None => false,
            }
        })
    }

    /// Writes `shape` into the board at `pos`.
    /// Leaves the board untouched and returns `InvalidPlacement` when it does not fit.
    pub fn place(&mut self, shape: &Shape, pos: Position) -> Result<(), EngineError> {
        if !self.can_place(shape, pos) {
            return Err(EngineError::InvalidPlacement { x: pos.x, y: pos.y });
        }

        for &(r, c) in shape.cells() {
            self.set_occupied(pos.x + c as i32, pos.y + r as i32)?;
        }

        Ok(())
    }

    /// `false` for rows outside the board.
    pub fn is_row_full(&self, y: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&y) && self.row_bits(y as usize) == ROW_MASK
    }

    /// Removes every full row in one pass and drops the remaining rows down.
    ///
    /// Fullness is judged on the board as it was before the call, so adjacent
    /// full rows are all cleared. Non-full rows keep their relative order and
    /// empty rows fill the top.
    pub fn clear_full_rows(&mut self) -> LineClear {
        let mut cleared = LineClear::default();
        let mut compacted = 0u128;
        let mut write_y = BOARD_SIZE;

        for read_y in (0..BOARD_SIZE).rev() {
            let row = self.row_bits(read_y);
            if row == ROW_MASK {
                cleared.rows.push(read_y as u8);
            } else {
                write_y -= 1;
                compacted |= row << (write_y * BOARD_SIZE);
            }
        }

        self.cells = compacted;
        cleared.rows.reverse();
        cleared
    }

    pub fn occupied_count(&self) -> u8 {
        self.cells.count_ones() as u8
    }

    pub fn empty_count(&self) -> u8 {
        NUM_CELLS as u8 - self.occupied_count()
    }

    /// Converts the board to `[u8; 100]` in row-major order, 0=empty, 1=filled.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        let mut board = [0u8; NUM_CELLS];
        for (idx, cell) in board.iter_mut().enumerate() {
            *cell = u8::from(self.cells & bit(idx) != 0);
        }
        board
    }

    /// CRC32 of [`Board::to_array`]. Equal boards always share a fingerprint.
    pub fn fingerprint(&self) -> u32 {
        crc32fast::hash(&self.to_array())
    }

    fn row_bits(&self, y: usize) -> u128 {
        (self.cells >> (y * BOARD_SIZE)) & ROW_MASK
    }
}

fn bit(idx: usize) -> u128 {
    if idx < NUM_CELLS { 1u128 << idx } else { 0 }
}

fn index(x: i32, y: i32) -> Option<usize> {
    let range = 0..BOARD_SIZE as i32;
    if range.contains(&x) && range.contains(&y) {
        Some(y as usize * BOARD_SIZE + x as usize)
    } else {
        None
    }
}
