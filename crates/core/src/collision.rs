//! Collision check shared by shifting, gravity, lock detection and rotation.

use crate::grid::Grid;
use crate::piece::Piece;

/// Would `piece`, translated by `(dx, dy)`, overlap a wall, the floor or a locked cell?
///
/// Cells above the well (`y < 0`) never hit locked cells but still have to stay
/// inside the side walls.
///
/// # Examples
///
/// ```
/// use blockfall_core::{collides, Grid, Piece};
/// use blockfall_types::PieceKind;
///
/// let grid = Grid::new();
/// let mut piece = Piece::spawn(PieceKind::I);
/// piece.x = 0;
/// assert!(collides(&piece, &grid, -1, 0));
/// assert!(!collides(&piece, &grid, 1, 0));
/// ```
pub fn collides(piece: &Piece, grid: &Grid, dx: i8, dy: i8) -> bool {
    piece
        .cells()
        .any(|(x, y)| grid.is_occupied(x + dx, y + dy) != Some(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, RED};

    #[test]
    fn test_floor_and_walls() {
        let grid = Grid::new();
        let mut piece = Piece::spawn(PieceKind::O);

        piece.y = 18;
        assert!(!collides(&piece, &grid, 0, 0));
        assert!(collides(&piece, &grid, 0, 1));

        piece.x = 8;
        assert!(!collides(&piece, &grid, 0, 0));
        assert!(collides(&piece, &grid, 1, 0));
        assert!(!collides(&piece, &grid, -1, 0));
    }

    #[test]
    fn test_above_well_only_checks_walls() {
        let mut grid = Grid::new();
        grid.fill_row(0, RED);
        let mut piece = Piece::spawn(PieceKind::I);
        piece.y = -1;
        assert!(!collides(&piece, &grid, 0, 0));
        assert!(collides(&piece, &grid, 0, 1));

        piece.x = 7;
        assert!(collides(&piece, &grid, 0, 0));
    }

    #[test]
    fn test_locked_cell_blocks_shift() {
        let mut grid = Grid::new();
        let piece = Piece::spawn(PieceKind::O); // cells at x 4..=5, y 0..=1
        grid.set(6, 1, Some(RED));
        assert!(collides(&piece, &grid, 1, 0));
        assert!(!collides(&piece, &grid, -1, 0));
    }
}
