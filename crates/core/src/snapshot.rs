use std::fmt::Write as _;

use crate::board::Board;
use crate::types::{CONTROLS_HINT, SPEED_DISPLAY_BASE};

/// Speedometer reading for a tick delay: `100 - speed + 10` mph.
pub fn speed_display(speed_ms: u32) -> u32 {
    SPEED_DISPLAY_BASE.saturating_sub(speed_ms)
}

/// Read-only view of everything a frame needs.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub board: &'a Board,
    pub score: u32,
    pub speed_ms: u32,
    pub difficulty: u32,
    pub player_column: u16,
    pub game_over: bool,
}

impl GameSnapshot<'_> {
    pub fn speed_display(&self) -> u32 {
        speed_display(self.speed_ms)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// `Score: N | Speed: Mmph`
    pub fn status_line(&self) -> String {
        format!(
            "Score: {} | Speed: {}mph",
            self.score,
            self.speed_display()
        )
    }

    /// Full plain-text frame: status line, every board row, controls hint.
    pub fn to_text(&self) -> String {
        let rows = self.board.height() as usize;
        let mut out = String::with_capacity((rows + 2) * (self.board.width() as usize + 1) + 64);
        let _ = writeln!(out, "{}", self.status_line());
        for y in 0..self.board.height() {
            out.push_str(&self.board.row_text(y));
            out.push('\n');
        }
        out.push_str(CONTROLS_HINT);
        out.push('\n');
        out
    }
}
