//! Session driver.
//!
//! Wires a [`core::GameEngine`] to a keyboard ([`input::KeySource`]), a display
//! ([`term::Screen`]) and a clock ([`Pacer`]). Every collaborator is a type
//! parameter, so a whole session can run headless with scripted keys, a
//! recording screen and a pacer that never sleeps.

pub mod game_loop;
pub mod pacer;

pub use tui_racer_core as core;
pub use tui_racer_input as input;
pub use tui_racer_term as term;
pub use tui_racer_types as types;

pub use game_loop::{GameLoop, Outcome, SessionSummary, WELCOME};
pub use pacer::{Pacer, RecordingPacer, ThreadPacer};
