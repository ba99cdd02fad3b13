//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Frame layout, anchored at the top-left corner:
//!
//! ```text
//! Score: 12 | Speed: 15mph
//!      |         |
//!      |    X    |
//!      ...
//!      |    A    |
//! Controls: A (left), D (right), Q (quit)
//! ```

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, CONTROLS_HINT};

const STATUS_LINE_MAX: u16 = 48;

/// Renders game frames and full-screen messages.
#[derive(Debug, Clone)]
pub struct GameView {
    text: CellStyle,
    wall: CellStyle,
    obstacle: CellStyle,
    player: CellStyle,
    hint: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            text: CellStyle::default(),
            wall: CellStyle::fg(Rgb::new(150, 150, 160)),
            obstacle: CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
            player: CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            hint: CellStyle::fg(Rgb::new(120, 120, 130)),
        }
    }
}

impl GameView {
    /// Framebuffer size needed for a snapshot.
    pub fn frame_size(snap: &GameSnapshot<'_>) -> (u16, u16) {
        let w = snap
            .board
            .width()
            .max(STATUS_LINE_MAX)
            .max(CONTROLS_HINT.chars().count() as u16);
        (w, snap.board.height() + 2)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path once the framebuffer has its size.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, fb: &mut FrameBuffer) {
        let (w, h) = Self::frame_size(snap);
        fb.resize(w, h);
        fb.clear(Cell::default());

        // Status line.
        let mut x = fb.put_str(0, 0, "Score: ", self.text);
        x = fb.put_u32(x, 0, snap.score, self.text);
        x = fb.put_str(x, 0, " | Speed: ", self.text);
        x = fb.put_u32(x, 0, snap.speed_display(), self.text);
        fb.put_str(x, 0, "mph", self.text);

        // Road.
        let board = snap.board;
        for y in 0..board.height() {
            for (x, &cell) in board.row(y).iter().enumerate() {
                fb.put_char(x as u16, y + 1, cell.glyph(), self.style_for(cell));
            }
        }

        fb.put_str(0, h - 1, CONTROLS_HINT, self.hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>) -> FrameBuffer {
        let (w, h) = Self::frame_size(snap);
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render plain lines of text (welcome and final screens).
    pub fn render_message_into(&self, lines: &[&str], fb: &mut FrameBuffer) {
        let w = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(1) as u16;
        let h = (lines.len() as u16).max(1);
        fb.resize(w, h);
        fb.clear(Cell::default());
        for (y, line) in lines.iter().enumerate() {
            fb.put_str(0, y as u16, line, self.text);
        }
    }

    pub fn render_message(&self, lines: &[&str]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_message_into(lines, &mut fb);
        fb
    }

    fn style_for(&self, cell: CellKind) -> CellStyle {
        match cell {
            CellKind::Empty => self.text,
            CellKind::Wall => self.wall,
            CellKind::Obstacle => self.obstacle,
            CellKind::Player => self.player,
        }
    }
}
