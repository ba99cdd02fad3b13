//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the simulation. It maps
//! `crossterm` key events into the characters [`crate::types::GameAction`] parses, and
//! hides the raw terminal behind the [`KeySource`] capability so the game loop
//! can be driven by a scripted keyboard in tests.

pub mod map;
pub mod source;

pub use tui_racer_types as types;

pub use map::key_to_char;
pub use source::{KeySource, KeyStep, ScriptedKeys, TerminalKeys};
