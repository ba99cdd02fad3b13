//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to a crossterm backend
//! as a full clear-and-redraw each frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the mapping from game state to characters pure ([`GameView`])
//! - Hide the terminal behind the [`Screen`] capability so the game loop can be
//!   tested without a TTY

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_full_into, TerminalRenderer};
pub use screen::{RecordingScreen, Screen, TerminalScreen};
