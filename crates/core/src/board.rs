//! Board module - manages the road grid
//!
//! The board is a `width` x `height` grid where each cell is empty, a wall, an
//! obstacle or the player's car. Uses a flat buffer allocated once at construction.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Obstacles enter at row 0; the car drives on the bottom row.

use std::ops::Range;

use crate::config::GameConfig;
use crate::types::CellKind;

/// The road grid using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    left_wall: u16,
    right_wall: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellKind>,
}

impl Board {
    /// Create an empty road with both wall columns painted on every row
    pub fn new(config: &GameConfig) -> Self {
        let width = config.width();
        let height = config.height();
        let mut board = Self {
            width,
            height,
            left_wall: config.left_wall(),
            right_wall: config.right_wall(),
            cells: vec![CellKind::Empty; width as usize * height as usize],
        };

        for y in 0..height {
            for x in [board.left_wall, board.right_wall] {
                let idx = board.idx(x, y);
                board.cells[idx] = CellKind::Wall;
            }
        }

        board
    }

    /// Calculate flat index from (x, y) coordinates; callers check bounds
    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.idx(x, y))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn left_wall(&self) -> u16 {
        self.left_wall
    }

    pub fn right_wall(&self) -> u16 {
        self.right_wall
    }

    /// Columns strictly between the two walls
    pub fn playable_columns(&self) -> Range<u16> {
        self.left_wall + 1..self.right_wall
    }

    pub fn is_wall_column(&self, x: u16) -> bool {
        x == self.left_wall || x == self.right_wall
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u16, y: u16) -> Option<CellKind> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    ///
    /// Returns false if out of bounds or if the write would touch a wall column
    /// (walls are fixed for the lifetime of the board).
    pub fn set(&mut self, x: u16, y: u16, cell: CellKind) -> bool {
        if self.is_wall_column(x) || cell == CellKind::Wall {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds an obstacle
    pub fn is_obstacle(&self, x: u16, y: u16) -> bool {
        matches!(self.get(x, y), Some(CellKind::Obstacle))
    }

    /// Copy the playable cell at (x, y - 1) into (x, y)
    pub(crate) fn pull_down(&mut self, x: u16, y: u16) {
        debug_assert!(y > 0 && y < self.height);
        debug_assert!(!self.is_wall_column(x));
        let src = self.idx(x, y - 1);
        let dst = self.idx(x, y);
        self.cells[dst] = self.cells[src];
    }

    /// Reset every playable cell of row `y` to empty
    pub fn clear_row(&mut self, y: u16) {
        if y >= self.height {
            return;
        }
        let start = self.idx(self.left_wall + 1, y);
        let end = self.idx(self.right_wall, y);
        self.cells[start..end].fill(CellKind::Empty);
    }

    /// Borrow one row of cells
    pub fn row(&self, y: u16) -> &[CellKind] {
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Printable text for one row
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.glyph()).collect()
    }

    /// Number of obstacles currently on the road
    pub fn obstacle_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellKind::Obstacle)
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Convert to printable rows for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }
}
