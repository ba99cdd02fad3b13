//! Road layout configuration.
//!
//! Wall columns sit at `(width - road_width) / 2` and `(width + road_width) / 2`.
//! Everything strictly between them is drivable.

use std::ops::Range;

use thiserror::Error;

use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_ROAD_WIDTH, DEFAULT_WIDTH, MAX_BOARD_HEIGHT, MIN_ROAD_WIDTH,
};

/// Reasons a road layout is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("road width {road_width} is below the minimum of {min}")]
    RoadTooNarrow { road_width: u16, min: u16 },
    #[error("road width {road_width} must be smaller than board width {width}")]
    RoadTooWide { road_width: u16, width: u16 },
    #[error("board height {height} leaves no room for obstacles to fall (need at least 2)")]
    BoardTooShort { height: u16 },
    #[error("board height {height} is above the maximum of {max}")]
    BoardTooTall { height: u16, max: u16 },
}

/// Validated board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: u16,
    height: u16,
    road_width: u16,
}

impl GameConfig {
    pub fn new(width: u16, height: u16, road_width: u16) -> Result<Self, ConfigError> {
        if road_width < MIN_ROAD_WIDTH {
            return Err(ConfigError::RoadTooNarrow {
                road_width,
                min: MIN_ROAD_WIDTH,
            });
        }
        if road_width >= width {
            return Err(ConfigError::RoadTooWide { road_width, width });
        }
        if height < 2 {
            return Err(ConfigError::BoardTooShort { height });
        }
        if height > MAX_BOARD_HEIGHT {
            return Err(ConfigError::BoardTooTall {
                height,
                max: MAX_BOARD_HEIGHT,
            });
        }
        Ok(Self {
            width,
            height,
            road_width,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn road_width(&self) -> u16 {
        self.road_width
    }

    /// Column of the left road edge.
    pub fn left_wall(&self) -> u16 {
        (self.width - self.road_width) / 2
    }

    /// Column of the right road edge, `(width + road_width) / 2`.
    pub fn right_wall(&self) -> u16 {
        self.left_wall() + self.road_width
    }

    /// Columns strictly between the walls.
    pub fn playable_columns(&self) -> Range<u16> {
        self.left_wall() + 1..self.right_wall()
    }

    /// Row the car drives on.
    pub fn bottom_row(&self) -> u16 {
        self.height - 1
    }

    /// Center of the road.
    pub fn start_column(&self) -> u16 {
        (self.left_wall() + self.right_wall()) / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            road_width: DEFAULT_ROAD_WIDTH,
        }
    }
}
