//! Terminal racer (workspace facade crate).
//!
//! This package exposes `tui_racer::{core,input,runner,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_racer_core as core;
pub use tui_racer_input as input;
pub use tui_racer_runner as runner;
pub use tui_racer_term as term;
pub use tui_racer_types as types;
