//! The input loop and the terminal it talks to.
//!
//! [`run`] is single-threaded and blocking: each tick renders one frame,
//! waits for one command and applies it. The terminal side sits behind
//! [`Frontend`] so the loop can be driven by a script in tests.

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::core::{GlyphMatrix, Session, Status, Tick};
use crate::event_log::{EventLog, LogRecord};
use crate::input::command_for_event;
use crate::term::{FrameBuffer, MapView, TermSize, TerminalRenderer};
use crate::types::Command;

/// Display and input collaborator of the loop.
pub trait Frontend {
    /// Block until one unit of input is available.
    fn next_command(&mut self) -> Result<Command>;

    /// Clear/redraw the display with the map window and the status line.
    fn render_frame(&mut self, glyphs: &GlyphMatrix, status: Status) -> Result<()>;

    /// Restore the display before exit.
    fn reset_display(&mut self) -> Result<()>;
}

/// Run the session until a quit command; returns the number of ticks.
///
/// The display is reset on quit. On error the caller is responsible for it.
pub fn run<F: Frontend>(session: &mut Session, frontend: &mut F, log: &mut EventLog) -> Result<u64> {
    let mut glyphs = GlyphMatrix::new(0, 0);
    let mut ticks = 0u64;

    loop {
        session.draw_into(&mut glyphs);
        frontend.render_frame(&glyphs, session.status())?;

        let command = frontend.next_command()?;
        ticks += 1;

        match session.apply(command) {
            Tick::Quit => {
                log.record(&LogRecord::Quit { ticks });
                frontend.reset_display()?;
                return Ok(ticks);
            }
            Tick::Continue(Some(outcome)) => {
                log.record(&LogRecord::movement(command, outcome, session));
            }
            Tick::Continue(None) => {}
        }
    }
}

/// [`Frontend`] backed by the real terminal through crossterm.
pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    view: MapView,
    fb: FrameBuffer,
    fallback_size: TermSize,
}

impl TerminalFrontend {
    /// `fallback_size` is used whenever the terminal size cannot be queried.
    pub fn new(fallback_size: TermSize) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: MapView::default(),
            fb: FrameBuffer::new(fallback_size.width, fallback_size.height),
            fallback_size,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }
}

impl Frontend for TerminalFrontend {
    fn next_command(&mut self) -> Result<Command> {
        let event = event::read()?;
        if let Event::Resize(_, _) = event {
            self.renderer.invalidate();
        }
        Ok(command_for_event(&event))
    }

    fn render_frame(&mut self, glyphs: &GlyphMatrix, status: Status) -> Result<()> {
        let size = TerminalRenderer::size()
            .map(|(w, h)| TermSize::new(w, h))
            .unwrap_or(self.fallback_size);
        self.view.render_into(glyphs, status, size, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn reset_display(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}
