//! Pieces module - tetromino shape matrices and the active piece
//!
//! Shapes are small boolean matrices (row-major). Rotation is a pure transform:
//! it always builds a fresh matrix, so a rejected rotation can simply drop the
//! candidate and keep the original.

use crate::types::{PieceKind, Rgb, GRID_WIDTH};

/// A non-empty, rectangular matrix of filled flags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: usize,
    /// Flat row-major cells (row * width + col)
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of flags.
    ///
    /// Returns None if there are no rows, a row is empty, or rows differ in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if width == 0 || rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Some(Self { width, cells })
    }

    /// Build a shape from rows of 0/1 values (any non-zero value is filled).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_bits(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!(t.width(), 3);
    /// assert_eq!(t.height(), 2);
    /// assert!(Shape::from_bits(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_bits(rows: &[&[u8]]) -> Option<Self> {
        let rows: Vec<Vec<bool>> = rows
            .iter()
            .map(|r| r.iter().map(|&b| b != 0).collect())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Flag at (row, col); false outside the matrix
    pub fn get(&self, row: usize, col: usize) -> bool {
        if col >= self.width {
            return false;
        }
        self.cells.get(row * self.width + col).copied().unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Offsets `(dx, dy)` of every filled cell, top row first
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }

    /// Rotate 90° clockwise: reverse the row order, then transpose.
    ///
    /// The result at `[r][c]` is the original at `[height-1-c][r]`, so an
    /// `h x w` shape becomes `w x h`.
    pub fn rotated_cw(&self) -> Shape {
        let old_h = self.height();
        let new_w = old_h;
        let new_h = self.width;
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..new_h {
            for c in 0..new_w {
                cells.push(self.get(old_h - 1 - c, r));
            }
        }
        Shape {
            width: new_w,
            cells,
        }
    }

    /// Copy out as nested rows (for display and assertions)
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

const I_BITS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_BITS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_BITS: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_BITS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_BITS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const S_BITS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const Z_BITS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];

/// Spawn orientation of a tetromino kind
pub fn shape_for(kind: PieceKind) -> Shape {
    let bits = match kind {
        PieceKind::I => I_BITS,
        PieceKind::O => O_BITS,
        PieceKind::T => T_BITS,
        PieceKind::L => L_BITS,
        PieceKind::J => J_BITS,
        PieceKind::S => S_BITS,
        PieceKind::Z => Z_BITS,
    };
    let rows: Vec<Vec<bool>> = bits
        .iter()
        .map(|r| r.iter().map(|&b| b != 0).collect())
        .collect();
    // The tables above are all rectangular and non-empty.
    let width = rows[0].len();
    Shape {
        width,
        cells: rows.into_iter().flatten().collect(),
    }
}

/// The active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind`, centered horizontally on the top row
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = shape_for(kind);
        let x = (GRID_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Candidate piece with the shape rotated clockwise, same position and color
    pub fn rotated(&self) -> Piece {
        Piece {
            kind: self.kind,
            shape: self.shape.rotated_cw(),
            x: self.x,
            y: self.y,
        }
    }

    /// Absolute grid positions of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(
                shape_for(kind).filled_cells().count(),
                4,
                "{:?} should have 4 cells",
                kind
            );
        }
    }

    #[test]
    fn test_shape_tables_match_from_bits() {
        assert_eq!(Some(shape_for(PieceKind::S)), Shape::from_bits(S_BITS));
        assert_eq!(Some(shape_for(PieceKind::I)), Shape::from_bits(I_BITS));
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let empty: [[bool; 0]; 0] = [];
        assert!(Shape::from_rows(&empty).is_none());
        assert!(Shape::from_rows(&[Vec::<bool>::new()]).is_none());
        assert!(Shape::from_rows(&[vec![true, true], vec![true]]).is_none());
    }

    #[test]
    fn test_spawn_is_centered() {
        // I is 4 wide: 10/2 - 4/2 = 3
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        // O is 2 wide: 5 - 1 = 4
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        // T is 3 wide: 5 - 1 = 4
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        assert!(PieceKind::ALL.iter().all(|&k| Piece::spawn(k).y == 0));
    }

    #[test]
    fn test_rotated_does_not_touch_original() {
        let piece = Piece::spawn(PieceKind::L);
        let before = piece.clone();
        let candidate = piece.rotated();
        assert_eq!(piece, before);
        assert_ne!(candidate.shape, piece.shape);
        assert_eq!((candidate.x, candidate.y), (piece.x, piece.y));
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let mut piece = Piece::spawn(PieceKind::O);
        piece.x = 2;
        piece.y = 5;
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }
}
