//! Render contract - how a simulation is handed to a drawing backend
//!
//! The simulation never draws. A backend implements [`Renderer`] and [`draw`]
//! walks a borrowed `Simulation`, emitting locked cells, the active piece and
//! the status text. Backends decide cell size, placement and fonts.

use crate::simulation::Simulation;
use crate::types::{Rgb, GRID_HEIGHT, GRID_WIDTH};

/// Where a line of text belongs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    /// Running score, always shown
    Status,
    /// Large centered message (game over)
    Banner,
}

/// Drawing backend for one frame
pub trait Renderer {
    /// Fill well cell `(x, y)` with `color`. Only in-bounds cells are emitted.
    fn draw_cell(&mut self, x: u8, y: u8, color: Rgb);

    fn draw_text(&mut self, slot: TextSlot, text: &str);
}

/// Emit one frame of `sim` into `out`.
///
/// Locked cells come first, then the active piece on top of them (cells above
/// the well are skipped), then the score and, once the game is over, the banner.
pub fn draw<R: Renderer + ?Sized>(sim: &Simulation, out: &mut R) {
    for (y, row) in sim.grid().rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Some(color) = cell {
                out.draw_cell(x as u8, y as u8, *color);
            }
        }
    }

    let piece = sim.piece();
    let color = piece.color();
    for (x, y) in piece.cells() {
        if (0..GRID_WIDTH as i8).contains(&x) && (0..GRID_HEIGHT as i8).contains(&y) {
            out.draw_cell(x as u8, y as u8, color);
        }
    }

    out.draw_text(TextSlot::Status, &format!("Score: {}", sim.score()));

    if sim.is_game_over() {
        out.draw_text(TextSlot::Banner, "Game Over!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::piece::Piece;
    use crate::simulation::SimConfig;
    use crate::types::{PieceKind, RED};

    #[derive(Default)]
    struct Recorder {
        cells: Vec<(u8, u8, Rgb)>,
        texts: Vec<(TextSlot, String)>,
    }

    impl Renderer for Recorder {
        fn draw_cell(&mut self, x: u8, y: u8, color: Rgb) {
            self.cells.push((x, y, color));
        }

        fn draw_text(&mut self, slot: TextSlot, text: &str) {
            self.texts.push((slot, text.to_string()));
        }
    }

    #[test]
    fn draws_locked_cells_then_piece() {
        let mut grid = Grid::new();
        grid.set(0, 19, Some(RED));
        let sim = Simulation::from_grid(grid, SimConfig::default())
            .with_piece(Piece::spawn(PieceKind::O));

        let mut rec = Recorder::default();
        draw(&sim, &mut rec);

        assert_eq!(rec.cells[0], (0, 19, RED));
        assert_eq!(rec.cells.len(), 5);
        assert!(rec.cells[1..]
            .iter()
            .all(|&(_, _, c)| c == PieceKind::O.color()));
        assert_eq!(rec.texts, vec![(TextSlot::Status, "Score: 0".to_string())]);
    }

    #[test]
    fn skips_piece_cells_above_the_well() {
        let mut piece = Piece::spawn(PieceKind::I).rotated();
        piece.y = -2;
        let sim = Simulation::default().with_piece(piece);

        let mut rec = Recorder::default();
        draw(&sim, &mut rec);
        assert_eq!(rec.cells.len(), 2);
    }

    #[test]
    fn game_over_adds_banner() {
        let mut grid = Grid::new();
        grid.fill_row(0, RED);
        grid.fill_row(1, RED);
        let sim = Simulation::from_grid(grid, SimConfig::default());
        assert!(sim.is_game_over());

        let mut rec = Recorder::default();
        draw(&sim, &mut rec);
        assert!(rec
            .texts
            .contains(&(TextSlot::Banner, "Game Over!".to_string())));
    }
}
