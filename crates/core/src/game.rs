//! Game control module - session state and per-tick maintenance
//!
//! Owns the grid, the score and the pause flag. The line-clear pass and
//! the composed tick live here; relaying movement and rotation commands
//! to the piece stays with the external driver.

use blockfall_types::LINE_SCORE;

use crate::board::Board;
use crate::piece::{LockedCells, Piece, StepOutcome};
use crate::rng::ShapePicker;
use crate::snapshot::{PieceSnapshot, SessionSnapshot};

/// Result of one composed session tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The falling piece advanced one row
    Advanced,
    /// The piece locked: `cells` joined the grid, `lines_cleared` full rows
    /// were removed, and the piece reference now holds a fresh spawn.
    Locked {
        cells: LockedCells,
        lines_cleared: usize,
    },
    /// A fresh spawn could not occupy its anchor cells. The session is
    /// over; the caller must stop the driver loop.
    GameOver,
}

/// Per-game session: grid, score and pause flag
#[derive(Debug, Clone)]
pub struct GameControl {
    board: Board,
    score: u32,
    paused: bool,
    game_over: bool,
}

impl GameControl {
    /// Create a fresh session with an empty grid and zero score
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            score: 0,
            paused: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for the piece lock path and for drivers that
    /// stage board contents directly
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Flip the pause flag. The flag is exported state for collaborators;
    /// no core operation consults it.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Line-clear pass: remove every full row, keep the row count fixed,
    /// and add the flat per-line bonus to the score. Returns the number of
    /// rows removed; a no-op when no row is full.
    pub fn update(&mut self) -> usize {
        let cleared = self.board.clear_full_rows().len();
        self.score += LINE_SCORE * cleared as u32;
        cleared
    }

    /// One full tick: gravity step, then on lock the respawn check and the
    /// line-clear pass, in that order within the same tick.
    ///
    /// The fresh spawn is tested against the grid as just locked, before
    /// any rows are cleared; on game over the clear pass does not run and
    /// the caller's piece reference is left untouched.
    pub fn tick(&mut self, piece: &mut Piece, picker: &mut ShapePicker) -> TickOutcome {
        match piece.step(&mut self.board) {
            StepOutcome::Advanced => TickOutcome::Advanced,
            StepOutcome::Locked(cells) => {
                let next = Piece::spawn(picker);
                if next.collides_at(&self.board, next.x, next.y) {
                    self.game_over = true;
                    return TickOutcome::GameOver;
                }

                let lines_cleared = self.update();
                *piece = next;
                TickOutcome::Locked {
                    cells,
                    lines_cleared,
                }
            }
        }
    }

    /// Fill a snapshot with the current session state
    pub fn snapshot_into(&self, piece: Option<&Piece>, out: &mut SessionSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.piece = piece.map(PieceSnapshot::from);
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self, piece: Option<&Piece>) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(piece, &mut s);
        s
    }
}

impl Default for GameControl {
    fn default() -> Self {
        Self::new()
    }
}
