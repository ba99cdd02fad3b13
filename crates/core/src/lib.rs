//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: The engine owns its random source; a fixed seed or a
//!   scripted [`SequenceRng`] replays the same run
//! - **Testable**: Every rule is a plain method call on [`GameEngine`]
//! - **Portable**: Runs in a terminal, in benches, or headless
//! - **Fast**: The tick paths never allocate; the board is allocated once
//!
//! # Module Structure
//!
//! - [`config`]: validated road layout and derived wall/lane columns
//! - [`board`]: flat row-major grid with permanent wall columns
//! - [`game_engine`]: obstacle shifting, spawning, steering, scoring, game over
//! - [`rng`]: injectable randomness
//! - [`snapshot`]: borrowed read-only frame view
//!
//! # Game Rules
//!
//! - **Road**: two wall columns bound the lanes; the car can never touch them
//! - **Obstacles**: every tick the road scrolls down one row and a new obstacle
//!   may appear in the top row with probability `1 / (10 - difficulty)`
//! - **Scoring**: one point per tick; every 10 points the tick delay drops by
//!   5ms (floor 30ms) and difficulty rises by one (cap 7)
//! - **Game over**: an obstacle and the car in the same cell
//!
//! # Example
//!
//! ```
//! use tui_racer_core::{GameConfig, GameEngine, SequenceRng};
//! use tui_racer_types::Direction;
//!
//! let mut game = GameEngine::new(GameConfig::default(), SequenceRng::never_spawn());
//!
//! game.tick(Some(Direction::Left));
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.player_column(), 9);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod config;
pub mod game_engine;
pub mod rng;
pub mod snapshot;

pub use tui_racer_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_engine::{spawn_odds, GameEngine};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::{speed_display, GameSnapshot};
