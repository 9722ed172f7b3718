//! WellView: maps a `Simulation` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It implements the core [`Renderer`] contract on
//! top of a [`FrameBuffer`], so it can be unit-tested without a terminal.

use crate::core::{draw, Renderer, Simulation, TextSlot};
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::{Rgb, GRID_HEIGHT, GRID_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the well frame and the side panel land for one viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    /// Top-left of the side panel, when there is room for one
    panel: Option<(u16, u16)>,
}

/// Draws the well, locked cells, the falling piece and the score panel.
pub struct WellView {
    /// Well cell width in terminal columns.
    cell_w: u16,
    /// Well cell height in terminal rows.
    cell_h: u16,
}

impl Default for WellView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl WellView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (GRID_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (GRID_HEIGHT as u16) * self.cell_h + 2;
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;

        let panel_x = frame_x.saturating_add(frame_w).saturating_add(2);
        let panel = if panel_x < viewport.width && viewport.width - panel_x >= 12 {
            Some((panel_x, frame_y))
        } else {
            None
        };

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel,
        }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, sim: &Simulation, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = self.layout(viewport);
        self.draw_well(fb, &layout);

        let mut painter = Painter {
            view: self,
            fb: &mut *fb,
            layout,
        };
        draw(sim, &mut painter);

        if let Some((x, y)) = layout.panel {
            let value = Style::fg(Rgb::new(200, 200, 200));
            let hint = value.dim();
            fb.put_str(x, y + 2, "Lines", value.bold());
            fb.put_str(x, y + 3, &sim.lines_cleared().to_string(), value);
            fb.put_str(x, y + 5, "←→ move", hint);
            fb.put_str(x, y + 6, "↑  rotate", hint);
            fb.put_str(x, y + 7, "↓  drop", hint);
            fb.put_str(x, y + 8, "q  quit", hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, sim: &Simulation, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
        let border = Style::fg(Rgb::new(200, 200, 200));

        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }

        let dot = Style::fg(Rgb::new(90, 90, 100)).on(WELL_BG).dim();
        for cy in 0..GRID_HEIGHT as u16 {
            for cx in 0..GRID_WIDTH as u16 {
                self.fill_cell(fb, layout, cx, cy, '·', dot);
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = layout.frame_x + 1 + cell_x * self.cell_w;
        let py = layout.frame_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

/// Borrowed view + framebuffer for the duration of one `draw` pass
struct Painter<'a> {
    view: &'a WellView,
    fb: &'a mut FrameBuffer,
    layout: Layout,
}

impl Renderer for Painter<'_> {
    fn draw_cell(&mut self, x: u8, y: u8, color: Rgb) {
        let style = Style::fg(color).on(WELL_BG).bold();
        self.view
            .fill_cell(self.fb, &self.layout, x as u16, y as u16, BLOCK, style);
    }

    fn draw_text(&mut self, slot: TextSlot, text: &str) {
        let style = Style::fg(Rgb::new(255, 255, 255)).bold();
        match slot {
            TextSlot::Status => {
                let (x, y) = self.layout.panel.unwrap_or((0, 0));
                self.fb.put_str(x, y, text, style);
            }
            TextSlot::Banner => {
                let text_w = text.chars().count() as u16;
                let x = self.layout.frame_x
                    + self.layout.frame_w.saturating_sub(text_w) / 2;
                let y = self.layout.frame_y + self.layout.frame_h / 2;
                self.fb.put_str(x, y, text, style);
            }
        }
    }
}
