//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::WIN_VALUE;

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

/// Explicit tile-value to color mapping.
///
/// Passed into the view rather than baked in, so alternate palettes are a
/// construction argument and the view itself stays value-agnostic.
#[derive(Debug, Clone)]
pub struct TilePalette {
    entries: Vec<(u32, Rgb)>,
    fallback: Rgb,
}

impl TilePalette {
    pub fn new(entries: Vec<(u32, Rgb)>, fallback: Rgb) -> Self {
        Self { entries, fallback }
    }

    /// Foreground color for a tile value.
    pub fn color(&self, value: u32) -> Rgb {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, c)| *c)
            .unwrap_or(self.fallback)
    }
}

impl Default for TilePalette {
    fn default() -> Self {
        Self::new(
            vec![
                (2, Rgb::new(230, 220, 130)),
                (4, Rgb::new(130, 220, 130)),
                (8, Rgb::new(110, 220, 220)),
                (16, Rgb::new(110, 150, 240)),
                (32, Rgb::new(210, 120, 230)),
                (64, Rgb::new(230, 100, 100)),
                (128, Rgb::new(250, 240, 150)),
                (256, Rgb::new(160, 250, 160)),
                (512, Rgb::new(150, 250, 250)),
                (1024, Rgb::new(150, 190, 255)),
                (2048, Rgb::new(250, 150, 250)),
                (4096, Rgb::new(255, 140, 140)),
            ],
            Rgb::new(255, 255, 255),
        )
    }
}

/// A lightweight terminal renderer for the puzzle board.
pub struct GameView {
    /// Board cell width in terminal columns; wide enough to center a value.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    palette: TilePalette,
}

impl Default for GameView {
    fn default() -> Self {
        // 7 columns fits a centered 6-digit value with breathing room.
        Self {
            cell_w: 7,
            cell_h: 1,
            palette: TilePalette::default(),
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16, palette: TilePalette) -> Self {
        Self {
            cell_w,
            cell_h,
            palette,
        }
    }

    /// Framebuffer width and height needed for a board of `size`.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let w = (size as u16) * self.cell_w + 2;
        let h = (size as u16) * self.cell_h + 2;
        (w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `status` is a transient message line under the board (rejected key,
    /// no-op move). Callers can reuse the framebuffer across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.size {
            for col in 0..snap.size {
                let value = snap.board[row][col];
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Status line under the board frame.
        if let Some(msg) = status {
            let style = CellStyle {
                fg: Rgb::new(220, 180, 100),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            };
            fb.put_str_centered(start_x, start_y + frame_h, frame_w, msg, style);
        }

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;

        if value == 0 {
            let style = CellStyle {
                fg: Rgb::new(90, 90, 100),
                bg: Rgb::new(30, 30, 40),
                bold: false,
                dim: true,
            };
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, "·", style);
            return;
        }

        let style = CellStyle {
            fg: self.palette.color(value),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_str_centered(
            px,
            py + self.cell_h / 2,
            self.cell_w,
            &value.to_string(),
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BOARD", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}x{}", snap.size, snap.size), value);
        y = y.saturating_add(2);

        if snap.won {
            let win = CellStyle {
                fg: self.palette.color(WIN_VALUE),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            fb.put_str(panel_x, y, "YOU WIN!", win);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "keep going", dim);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "wasd/arrows move", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", dim);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
