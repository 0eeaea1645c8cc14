//! Shape module - catalog footprints and matrix rotation
//!
//! A shape is a small rectangular grid of binary cells. Rotation produces a
//! new matrix with the footprint transposed: clockwise maps cell (r, c) to
//! (c, h-1-r), counter-clockwise maps it to (c, r).

use arrayvec::ArrayVec;

use blockfall_types::ShapeKind;

/// Upper bound on matrix cells. The largest catalog footprint uses 6 cells;
/// 16 also admits 4x4 matrices injected by tests.
pub const MAX_SHAPE_CELLS: usize = 16;

/// Rectangular binary footprint of a piece
///
/// Invariant: every row has exactly `width` cells and `height * width`
/// never exceeds [`MAX_SHAPE_CELLS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMatrix {
    width: u8,
    height: u8,
    /// Flat cells, row-major order (row * width + col)
    cells: ArrayVec<u8, MAX_SHAPE_CELLS>,
}

impl ShapeMatrix {
    /// Build a matrix from row slices. Panics on empty or ragged input.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty(), "shape must have at least one row");
        let width = rows[0].len();
        assert!(width > 0, "shape rows must not be empty");

        let mut cells = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), width, "shape rows must all have the same width");
            for &cell in row.iter() {
                debug_assert!(cell <= 1, "cell values are only 0 or 1");
                cells.push(cell);
            }
        }

        Self {
            width: width as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: u8, col: u8) -> u8 {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row as usize * self.width as usize + col as usize]
    }

    /// Enumerate (row, col) of every filled cell, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(move |(i, _)| ((i / width) as u8, (i % width) as u8))
    }

    /// Produce the rotated matrix with width and height swapped
    pub fn rotated(&self, clockwise: bool) -> ShapeMatrix {
        let h = self.height as usize;
        let w = self.width as usize;

        let mut cells: ArrayVec<u8, MAX_SHAPE_CELLS> = (0..h * w).map(|_| 0).collect();
        for r in 0..h {
            for c in 0..w {
                let value = self.cells[r * w + c];
                // new matrix has w rows of h columns
                let dst = if clockwise {
                    c * h + (h - 1 - r)
                } else {
                    c * h + r
                };
                cells[dst] = value;
            }
        }

        ShapeMatrix {
            width: h as u8,
            height: w as u8,
            cells,
        }
    }
}

/// Catalog footprint for a shape kind
pub fn catalog_matrix(kind: ShapeKind) -> ShapeMatrix {
    match kind {
        ShapeKind::Square => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        ShapeKind::Tee => ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        ShapeKind::Line => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        ShapeKind::Skew => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dimensions() {
        let square = catalog_matrix(ShapeKind::Square);
        assert_eq!((square.height(), square.width()), (2, 2));

        let tee = catalog_matrix(ShapeKind::Tee);
        assert_eq!((tee.height(), tee.width()), (2, 3));

        let line = catalog_matrix(ShapeKind::Line);
        assert_eq!((line.height(), line.width()), (1, 4));

        let skew = catalog_matrix(ShapeKind::Skew);
        assert_eq!((skew.height(), skew.width()), (2, 3));
    }

    #[test]
    fn test_rotate_clockwise_tee() {
        let tee = catalog_matrix(ShapeKind::Tee);
        let rotated = tee.rotated(true);

        // [[0,1,0],      [[1,0],
        //  [1,1,1]]  ->   [1,1],
        //                 [1,0]]
        assert_eq!((rotated.height(), rotated.width()), (3, 2));
        assert_eq!(rotated.get(0, 0), 1);
        assert_eq!(rotated.get(0, 1), 0);
        assert_eq!(rotated.get(1, 0), 1);
        assert_eq!(rotated.get(1, 1), 1);
        assert_eq!(rotated.get(2, 0), 1);
        assert_eq!(rotated.get(2, 1), 0);
    }

    #[test]
    fn test_rotate_counter_clockwise_is_transpose() {
        let skew = catalog_matrix(ShapeKind::Skew);
        let transposed = skew.rotated(false);

        for (r, c) in skew.filled_cells() {
            assert_eq!(transposed.get(c, r), 1);
        }
        // Transposing twice restores the original
        assert_eq!(transposed.rotated(false), skew);
    }

    #[test]
    fn test_four_clockwise_rotations_roundtrip() {
        for kind in ShapeKind::ALL {
            let original = catalog_matrix(kind);
            let mut matrix = original.clone();
            for _ in 0..4 {
                matrix = matrix.rotated(true);
            }
            assert_eq!(matrix, original, "4x clockwise should restore {:?}", kind);
        }
    }

    #[test]
    fn test_filled_cells_enumeration() {
        let tee = catalog_matrix(ShapeKind::Tee);
        let cells: Vec<(u8, u8)> = tee.filled_cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    }
}
