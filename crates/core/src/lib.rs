//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state for the falling-block
//! core. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 16x16 binary grid with row clearing and compaction
//! - [`shape`]: the four-shape catalog and footprint rotation
//! - [`piece`]: the falling piece - movement, collision, gravity step
//! - [`game`]: session state - grid ownership, score, composed tick
//! - [`rng`]: seeded LCG and uniform shape selection
//! - [`snapshot`]: exported state for rendering collaborators
//!
//! # Game Rules
//!
//! - Pieces spawn at the horizontal center of the top row, chosen
//!   uniformly from a catalog of four shapes
//! - Rotation transposes the footprint and never checks the grid
//! - A cell on the bottom boundary row already counts as a collision, so
//!   pieces settle one row above it
//! - Locking writes the piece's visible cells into the grid; every full
//!   row is then removed, compacted downward, and scored at a flat
//!   100 points per line
//! - A fresh spawn that cannot occupy its anchor cells ends the session
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameControl, Piece, ShapePicker, TickOutcome};
//!
//! let mut control = GameControl::new();
//! let mut picker = ShapePicker::new(12345);
//! let mut piece = Piece::spawn(&mut picker);
//!
//! // The fresh piece has room below, so the first tick advances it.
//! let outcome = control.tick(&mut piece, &mut picker);
//! assert_eq!(outcome, TickOutcome::Advanced);
//! assert_eq!(piece.y, 1);
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use board::{Board, ClearedRows};
pub use game::{GameControl, TickOutcome};
pub use piece::{LockedCells, Piece, StepOutcome, SPAWN_POSITION};
pub use rng::{ShapePicker, SimpleRng};
pub use shape::{catalog_matrix, ShapeMatrix, MAX_SHAPE_CELLS};
pub use snapshot::{PieceSnapshot, SessionSnapshot};
