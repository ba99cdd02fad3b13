//! Keyboard capability used by the game loop.
//!
//! The loop asks two questions: is a key waiting (without blocking), and what is
//! the next character (blocking). [`TerminalKeys`] answers them from crossterm;
//! [`ScriptedKeys`] answers them from a fixed script.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::key_to_char;

pub trait KeySource {
    /// Whether a key press is waiting. Never blocks.
    fn poll_pending(&mut self) -> Result<bool>;

    /// Consume one key press, blocking until one arrives.
    fn read_char(&mut self) -> Result<char>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn poll_pending(&mut self) -> Result<bool> {
        (**self).poll_pending()
    }

    fn read_char(&mut self) -> Result<char> {
        (**self).read_char()
    }
}

/// Keyboard backed by crossterm's event queue.
///
/// Expects the terminal to already be in raw mode (see the term crate's renderer).
#[derive(Debug, Default)]
pub struct TerminalKeys {
    /// Press found by `poll_pending`, handed out by the next `read_char`.
    pending: Option<KeyEvent>,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl KeySource for TerminalKeys {
    fn poll_pending(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }

        // Drain resizes, focus changes and releases so only a press counts as pending.
        while event::poll(Duration::ZERO)? {
            if let Some(key) = key_press(event::read()?) {
                self.pending = Some(key);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn read_char(&mut self) -> Result<char> {
        if let Some(key) = self.pending.take() {
            return Ok(key_to_char(key));
        }
        loop {
            if let Some(key) = key_press(event::read()?) {
                return Ok(key_to_char(key));
            }
        }
    }
}

fn key_press(ev: Event) -> Option<KeyEvent> {
    match ev {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
        _ => None,
    }
}

/// One poll's worth of scripted keyboard activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStep {
    /// Nothing typed
    Idle,
    /// This character is typed
    Press(char),
    /// The terminal reports an error
    Fail,
}

/// Deterministic keyboard for tests and replays.
///
/// Every `poll_pending` without a buffered key consumes one step. A blocking
/// `read_char` skips idle steps until it reaches a press. An exhausted script
/// reports no pending keys and fails blocking reads.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    steps: VecDeque<KeyStep>,
    pending: Option<char>,
    polls: usize,
}

impl ScriptedKeys {
    pub fn new(steps: impl IntoIterator<Item = KeyStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            pending: None,
            polls: 0,
        }
    }

    /// Script where each character is typed at successive polls; `.` means idle.
    pub fn typed(script: &str) -> Self {
        Self::new(script.chars().map(|ch| match ch {
            '.' => KeyStep::Idle,
            ch => KeyStep::Press(ch),
        }))
    }

    /// Number of `poll_pending` calls so far.
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Steps not yet consumed.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_pending(&mut self) -> Result<bool> {
        self.polls += 1;
        if self.pending.is_some() {
            return Ok(true);
        }
        match self.steps.pop_front() {
            Some(KeyStep::Press(ch)) => {
                self.pending = Some(ch);
                Ok(true)
            }
            Some(KeyStep::Fail) => Err(anyhow!("scripted terminal failure")),
            Some(KeyStep::Idle) | None => Ok(false),
        }
    }

    fn read_char(&mut self) -> Result<char> {
        if let Some(ch) = self.pending.take() {
            return Ok(ch);
        }
        loop {
            match self.steps.pop_front() {
                Some(KeyStep::Press(ch)) => return Ok(ch),
                Some(KeyStep::Idle) => continue,
                Some(KeyStep::Fail) => return Err(anyhow!("scripted terminal failure")),
                None => return Err(anyhow!("key script exhausted")),
            }
        }
    }
}
