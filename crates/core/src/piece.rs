//! Piece module - the falling shape and its interactions with the grid
//!
//! A piece owns its footprint matrix and its board position (top-left
//! anchor). Movement and the gravity step validate against the board;
//! rotation performs no grid check. Cells outside the visible grid are
//! never examined for collision and are never written on lock.

use arrayvec::ArrayVec;

use blockfall_types::{MoveDirection, GAME_HEIGHT, GAME_WIDTH};

use crate::board::Board;
use crate::rng::ShapePicker;
use crate::shape::{catalog_matrix, ShapeMatrix, MAX_SHAPE_CELLS};

/// Spawn anchor for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (GAME_WIDTH as i8 / 2, 0);

/// Cells written into the grid by a lock
pub type LockedCells = ArrayVec<(i8, i8), MAX_SHAPE_CELLS>;

/// Result of one gravity step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row
    Advanced,
    /// The piece could not move down; its on-screen cells are now grid state.
    /// Replacing the piece with a fresh spawn is the caller's job.
    Locked(LockedCells),
}

/// The actively falling shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn a uniformly random catalog shape at the spawn anchor
    pub fn spawn(picker: &mut ShapePicker) -> Self {
        Self::from_matrix(catalog_matrix(picker.draw()))
    }

    /// Spawn an explicitly injected footprint at the spawn anchor
    /// (used for deterministic testing)
    pub fn from_matrix(matrix: ShapeMatrix) -> Self {
        Self {
            matrix,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Footprint height in rows
    pub fn height(&self) -> u8 {
        self.matrix.height()
    }

    /// Footprint width in columns
    pub fn width(&self) -> u8 {
        self.matrix.width()
    }

    /// Rotate the footprint in place. No collision or containment check
    /// is performed; the surrounding grid only constrains subsequent
    /// moves and gravity steps.
    pub fn rotate(&mut self, clockwise: bool) {
        self.matrix = self.matrix.rotated(clockwise);
    }

    /// Try to shift the piece one column. The move is accepted only if the
    /// candidate position collides with nothing and every occupied cell
    /// stays inside the grid; otherwise the piece is left untouched.
    pub fn try_move(&mut self, board: &Board, direction: MoveDirection) -> bool {
        let new_x = self.x + direction.dx();

        let in_grid = self
            .block_cells_at(new_x, self.y)
            .all(|(cx, cy)| Self::cell_in_grid(cx, cy));

        if in_grid && !self.collides_at(board, new_x, self.y) {
            self.x = new_x;
            return true;
        }

        false
    }

    /// One gravity step. If the row below collides, the piece locks: every
    /// on-screen cell of the *current* position is written into the grid
    /// and returned. Otherwise the piece advances one row.
    pub fn step(&mut self, board: &mut Board) -> StepOutcome {
        if self.collides_at(board, self.x, self.y + 1) {
            let mut cells = LockedCells::new();
            for (cx, cy) in self.on_screen_cells_at(self.x, self.y) {
                cells.push((cx, cy));
            }
            for &(cx, cy) in &cells {
                board.set(cx, cy, 1);
            }
            StepOutcome::Locked(cells)
        } else {
            self.y += 1;
            StepOutcome::Advanced
        }
    }

    /// Collision test for a candidate anchor: true if any on-screen
    /// occupied cell overlaps a filled grid cell or sits on the bottom
    /// boundary row (row GAME_HEIGHT - 1 itself already collides, so
    /// pieces settle with their lowest cells one row above it).
    pub fn collides_at(&self, board: &Board, x: i8, y: i8) -> bool {
        self.on_screen_cells_at(x, y)
            .any(|(cx, cy)| board.is_occupied(cx, cy) || cy >= GAME_HEIGHT as i8 - 1)
    }

    /// Occupied cells of the current position that lie inside the grid
    pub fn on_screen_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.on_screen_cells_at(self.x, self.y)
    }

    /// Occupied cells at the given anchor, filtered to the visible grid.
    /// Lazy, restartable, no side effects.
    pub fn on_screen_cells_at(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.block_cells_at(x, y)
            .filter(|&(cx, cy)| Self::cell_in_grid(cx, cy))
    }

    /// Occupied cells at the given anchor, including off-screen ones
    fn block_cells_at(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .filled_cells()
            .map(move |(row, col)| (x + col as i8, y + row as i8))
    }

    fn cell_in_grid(x: i8, y: i8) -> bool {
        (0..GAME_WIDTH as i8).contains(&x) && (0..GAME_HEIGHT as i8).contains(&y)
    }
}
