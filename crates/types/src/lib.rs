//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default road layout:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14, row 14 is where the car drives)
//! - **Road width**: 10, which puts the walls at columns 5 and 15
//!
//! # Pacing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 100 | Tick delay at the start of a run |
//! | `SPEED_STEP_MS` | 5 | Delay removed at each ramp |
//! | `SPEED_FLOOR_MS` | 30 | Fastest possible tick delay |
//! | `POINTS_PER_RAMP` | 10 | Score interval between ramps |
//!
//! # Spawn Odds by Difficulty
//!
//! An obstacle spawns with probability `1 / (SPAWN_ODDS_BASE - difficulty)`:
//!
//! | Difficulty | Chance |
//! |------------|--------|
//! | 0 | 1/10 |
//! | 3 | 1/7 |
//! | 7 | 1/3 |
//!
//! # Examples
//!
//! ```
//! use tui_racer_types::{CellKind, GameAction, DEFAULT_WIDTH, DEFAULT_ROAD_WIDTH};
//!
//! assert_eq!(CellKind::Wall.glyph(), '|');
//! assert_eq!(CellKind::from_glyph('X'), Some(CellKind::Obstacle));
//!
//! assert_eq!(GameAction::from_char('D'), Some(GameAction::MoveRight));
//!
//! assert_eq!(DEFAULT_WIDTH, 20);
//! assert_eq!(DEFAULT_ROAD_WIDTH, 10);
//! ```

/// Default board width in columns
pub const DEFAULT_WIDTH: u16 = 20;

/// Default board height in rows
pub const DEFAULT_HEIGHT: u16 = 15;

/// Default distance between the two wall columns
pub const DEFAULT_ROAD_WIDTH: u16 = 10;

/// Narrowest road that still leaves a drivable corridor
pub const MIN_ROAD_WIDTH: u16 = 3;

/// Tallest board that still fits a frame with its status and hint rows
pub const MAX_BOARD_HEIGHT: u16 = u16::MAX - 2;

/// Tick delay at the start of a run
pub const INITIAL_SPEED_MS: u32 = 100;

/// Delay removed from the tick at each difficulty ramp
pub const SPEED_STEP_MS: u32 = 5;

/// The tick delay never drops below this value
pub const SPEED_FLOOR_MS: u32 = 30;

/// Score interval between difficulty ramps
pub const POINTS_PER_RAMP: u32 = 10;

/// Highest difficulty level
pub const MAX_DIFFICULTY: u32 = 7;

/// Spawn odds denominator at difficulty 0
pub const SPAWN_ODDS_BASE: u32 = 10;

/// The speedometer shows `SPEED_DISPLAY_BASE - speed_ms` ("100 - speed + 10")
pub const SPEED_DISPLAY_BASE: u32 = 110;

/// Static hint printed under the road
pub const CONTROLS_HINT: &str = "Controls: A (left), D (right), Q (quit)";

// Spawn odds are `1 / (SPAWN_ODDS_BASE - difficulty)`; the cap keeps the denominator positive.
const _: () = assert!(MAX_DIFFICULTY < SPAWN_ODDS_BASE);
const _: () = assert!(SPEED_FLOOR_MS <= INITIAL_SPEED_MS);

/// Content of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    /// Open road
    #[default]
    Empty,
    /// Road edge, painted once at construction and never changed
    Wall,
    /// Falling obstacle
    Obstacle,
    /// The player's car
    Player,
}

impl CellKind {
    /// Printable glyph for the cell
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_racer_types::CellKind;
    ///
    /// assert_eq!(CellKind::Empty.glyph(), ' ');
    /// assert_eq!(CellKind::Player.glyph(), 'A');
    /// ```
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => ' ',
            CellKind::Wall => '|',
            CellKind::Obstacle => 'X',
            CellKind::Player => 'A',
        }
    }

    /// Parse a cell from its glyph
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(CellKind::Empty),
            '|' => Some(CellKind::Wall),
            'X' => Some(CellKind::Obstacle),
            'A' => Some(CellKind::Player),
            _ => None,
        }
    }
}

/// Steering requested for a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

/// Commands the player can issue from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer one column left
    MoveLeft,
    /// Steer one column right
    MoveRight,
    /// End the run
    Quit,
}

impl GameAction {
    /// Parse an action from a typed character (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_racer_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_char('a'), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_char('Q'), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_char('w'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' => Some(GameAction::MoveLeft),
            'd' => Some(GameAction::MoveRight),
            'q' => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Steering implied by the action
    pub fn direction(self) -> Direction {
        match self {
            GameAction::MoveLeft => Direction::Left,
            GameAction::MoveRight => Direction::Right,
            GameAction::Quit => Direction::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Quit => "quit",
        }
    }
}
