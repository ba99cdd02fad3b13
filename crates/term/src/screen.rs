//! Display capability used by the game loop.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::renderer::TerminalRenderer;

/// Somewhere frames and messages can be shown.
pub trait Screen {
    /// Clear and redraw the game frame.
    fn show_game(&mut self, snap: &GameSnapshot<'_>) -> Result<()>;

    /// Clear and show a full-screen text message.
    fn show_message(&mut self, lines: &[&str]) -> Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn show_game(&mut self, snap: &GameSnapshot<'_>) -> Result<()> {
        (**self).show_game(snap)
    }

    fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        (**self).show_message(lines)
    }
}

/// [`Screen`] drawing to the real terminal through a reused framebuffer.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn show_game(&mut self, snap: &GameSnapshot<'_>) -> Result<()> {
        self.view.render_into(snap, &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        self.view.render_message_into(lines, &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}

/// [`Screen`] that keeps plain-text copies of everything shown.
#[derive(Debug, Clone, Default)]
pub struct RecordingScreen {
    /// Each game frame as produced by [`GameSnapshot::to_text`].
    pub frames: Vec<String>,
    /// Each message screen, one entry per line.
    pub messages: Vec<Vec<String>>,
}

impl RecordingScreen {
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Screen for RecordingScreen {
    fn show_game(&mut self, snap: &GameSnapshot<'_>) -> Result<()> {
        self.frames.push(snap.to_text());
        Ok(())
    }

    fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        self.messages
            .push(lines.iter().map(|l| l.to_string()).collect());
        Ok(())
    }
}
