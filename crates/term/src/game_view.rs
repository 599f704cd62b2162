//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The hexagon is laid out the classic way: every tile is a 6x3 colored
//! block on an 8x4 grid pitch, with each row indented by half a pitch per
//! cell of width it is short of the middle row. Tile colors cycle with the
//! exponent of the value.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, Tile, ROW_COUNT, ROW_WIDTHS};

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

/// Horizontal pitch between tile columns.
const TILE_PITCH_X: usize = 8;

/// Vertical pitch between tile rows.
const TILE_PITCH_Y: usize = 4;

/// Column where the help text starts.
const HELP_X: u16 = 43;

/// Column where the banner and score panel start.
const PANEL_X: u16 = 72;

/// Background colors by value exponent (index 1 doubles as the empty tile).
const PALETTE: [Rgb; 15] = [
    Rgb::new(0, 0, 0),
    Rgb::new(220, 220, 220), // empty / 2^0
    Rgb::new(80, 220, 220),  // 2
    Rgb::new(80, 120, 220),  // 4
    Rgb::new(100, 220, 120), // 8
    Rgb::new(240, 220, 80),  // 16
    Rgb::new(200, 120, 220), // 32
    Rgb::new(220, 80, 80),   // 64
    Rgb::new(80, 220, 220),  // 128
    Rgb::new(80, 120, 220),  // 256
    Rgb::new(100, 220, 120), // 512
    Rgb::new(240, 220, 80),  // 1024
    Rgb::new(200, 120, 220), // 2048
    Rgb::new(220, 80, 80),   // 4096
    Rgb::new(220, 80, 80),   // 8192 and up
];

const HELP: [&str; 21] = [
    "Join the numbers and",
    "get to the 16384 tile!",
    "",
    " W               E",
    "   .           .",
    "     .       .",
    "       .   .",
    "A . . . . . . . . . D",
    "       .   .",
    "     .       .",
    "   .           .",
    " Z               X",
    "",
    "HOW TO PLAY: use the keys",
    "W, E, A, D, Z and X to move",
    "the tiles in the six",
    "directions. When two tiles",
    "with the same number touch,",
    "they merge into one!",
    "",
    "Press q at any time to exit",
];

/// A lightweight terminal view for the hexagonal board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        for row in 0..ROW_COUNT {
            let width = ROW_WIDTHS[row];
            let indent = (ROW_WIDTHS[2] - width) * (TILE_PITCH_X / 2);
            for col in 0..width {
                let px = (col * TILE_PITCH_X + 1 + indent) as u16;
                let py = (row * TILE_PITCH_Y + 1) as u16;
                self.draw_tile(fb, px, py, snap.row(row)[col]);
            }
        }

        self.draw_panel(fb, snap);
        self.draw_help(fb);

        match snap.outcome {
            Outcome::Won => self.draw_overlay(fb, "You won! Press q to exit"),
            Outcome::Lost => self.draw_overlay(fb, "You lose! Press q to exit"),
            Outcome::Ongoing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw one 6x3 tile block with its value centered on the middle row.
    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: Tile) {
        let bg = PALETTE[color_index(value)];
        let block = CellStyle {
            fg: bg,
            bg,
            bold: false,
        };

        fb.fill_rect(px + 1, py, 4, 1, ' ', block);
        fb.fill_rect(px, py + 1, 6, 1, ' ', block);
        fb.fill_rect(px + 1, py + 2, 4, 1, ' ', block);

        if value == 0 {
            return;
        }

        let text = if value >= 128 {
            // Bright tiles punch the value through in inverse.
            CellStyle {
                fg: Rgb::new(235, 235, 235),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            }
        } else {
            CellStyle {
                fg: Rgb::new(20, 20, 25),
                bg,
                bold: true,
            }
        };

        let digits = digit_count(value);
        let (field, offset) = if digits > 4 { (6, 0) } else { (4, 1) };
        let left = (field - digits) / 2;
        fb.put_u32(px + offset + left as u16, py + 1, value, text);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        fb.put_str(PANEL_X, 0, "=====", label);
        fb.put_str(PANEL_X, 1, "16384", label);
        fb.put_str(PANEL_X, 2, "=====", label);
        fb.put_str(PANEL_X, 4, "SCORE:", label);
        fb.put_u32(PANEL_X, 5, snap.score, value);
    }

    fn draw_help(&self, fb: &mut FrameBuffer) {
        let style = CellStyle::default();
        for (i, line) in HELP.iter().enumerate() {
            fb.put_str(HELP_X, 1 + i as u16, line, style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let inner = text.chars().count() as u16 + 2;
        let x = 40u16.saturating_sub((inner + 2) / 2);
        let y = 10;

        for frame_y in [y, y + 2] {
            fb.put_char(x, frame_y, '+', style);
            for dx in 0..inner {
                fb.put_char(x + 1 + dx, frame_y, '-', style);
            }
            fb.put_char(x + 1 + inner, frame_y, '+', style);
        }
        fb.put_char(x, y + 1, '|', style);
        fb.put_char(x + 1 + inner, y + 1, '|', style);
        fb.put_str(x + 2, y + 1, text, style);
    }
}

/// Palette index for a tile value (its exponent, clamped to the palette).
fn color_index(value: Tile) -> usize {
    if value < 2 {
        return 1;
    }
    (((31 - value.leading_zeros()) as usize) + 1).min(14)
}

fn digit_count(value: u32) -> usize {
    let mut n = value;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CELL_COUNT;

    fn row_string(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    fn snapshot_with(cells: [Tile; CELL_COUNT], score: u32, outcome: Outcome) -> GameSnapshot {
        GameSnapshot {
            cells,
            score,
            outcome,
            seed: 1,
        }
    }

    #[test]
    fn color_index_tracks_the_exponent() {
        assert_eq!(color_index(0), 1);
        assert_eq!(color_index(2), 2);
        assert_eq!(color_index(4), 3);
        assert_eq!(color_index(64), 7);
        assert_eq!(color_index(16384), 14);
    }

    #[test]
    fn tile_value_lands_centered_on_its_block() {
        let mut cells = [0; CELL_COUNT];
        cells[0] = 2; // (0, 0)
        let snap = snapshot_with(cells, 0, Outcome::Ongoing);

        let fb = GameView::new().render(&snap, Viewport::new(80, 24));

        // Row 0 is indented by one pitch; the value sits on the middle line.
        assert_eq!(fb.get(11, 2).map(|c| c.ch), Some('2'));
    }

    #[test]
    fn middle_row_is_not_indented() {
        let mut cells = [0; CELL_COUNT];
        cells[7] = 4; // (2, 0)
        let snap = snapshot_with(cells, 0, Outcome::Ongoing);

        let fb = GameView::new().render(&snap, Viewport::new(80, 24));
        assert_eq!(fb.get(3, 10).map(|c| c.ch), Some('4'));
    }

    #[test]
    fn score_and_banner_are_drawn() {
        let snap = snapshot_with([0; CELL_COUNT], 1234, Outcome::Ongoing);
        let fb = GameView::new().render(&snap, Viewport::new(80, 24));

        assert!(row_string(&fb, 1).contains("16384"));
        assert!(row_string(&fb, 4).contains("SCORE:"));
        assert!(row_string(&fb, 5).contains("1234"));
    }

    #[test]
    fn outcome_overlays_are_drawn() {
        let won = snapshot_with([0; CELL_COUNT], 0, Outcome::Won);
        let fb = GameView::new().render(&won, Viewport::new(80, 24));
        assert!(row_string(&fb, 11).contains("You won! Press q to exit"));

        let lost = snapshot_with([0; CELL_COUNT], 0, Outcome::Lost);
        let fb = GameView::new().render(&lost, Viewport::new(80, 24));
        assert!(row_string(&fb, 11).contains("You lose! Press q to exit"));

        let ongoing = snapshot_with([0; CELL_COUNT], 0, Outcome::Ongoing);
        let fb = GameView::new().render(&ongoing, Viewport::new(80, 24));
        assert!(!row_string(&fb, 11).contains("Press q to exit"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = snapshot_with([2; CELL_COUNT], 42, Outcome::Won);
        let fb = GameView::new().render(&snap, Viewport::new(10, 4));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 4);
    }
}
