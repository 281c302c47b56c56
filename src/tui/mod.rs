//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, draws `RenderedPage`s and
//! translates keyboard events into core `Signal` values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! sees it through the `RenderBoundary` trait.
//!
//! ## Terminal Lifetime
//!
//! The terminal is acquired once, before the first page, and released by
//! `TerminalGuard` on every way out: normal return, error return, and panic
//! (ratatui's init installs a hook that restores the terminal first).

mod component;
mod components;
mod event;
mod ui;

use std::io;

use log::{info, warn};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::SessionError;
use crate::core::config::Palette;
use crate::core::navigation::Signal;
use crate::core::session::{RenderBoundary, RenderedPage, Session};
use crate::tui::event::{TuiEvent, read_event};

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Live terminal behind the `RenderBoundary` seam.
pub struct TerminalPresenter {
    terminal: DefaultTerminal,
    palette: Palette,
    indent: u16,
}

impl TerminalPresenter {
    pub fn new(terminal: DefaultTerminal, palette: Palette, indent: u16) -> Self {
        Self {
            terminal,
            palette,
            indent,
        }
    }
}

impl RenderBoundary for TerminalPresenter {
    fn measure(&mut self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.height, size.width))
    }

    fn draw(&mut self, page: &RenderedPage) -> io::Result<()> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let areas = ui::page_areas(area, page.banner, self.indent);
        if let Some(body) = areas.body
            && page.lines.len() > usize::from(body.height)
        {
            warn!(
                "Slide body has {} lines but only {} rows fit; the rest is clipped",
                page.lines.len(),
                body.height
            );
        }

        let palette = self.palette;
        let indent = self.indent;
        self.terminal
            .draw(|f| ui::draw_page(f, page, &palette, indent))?;
        Ok(())
    }

    fn wait_for_signal(&mut self) -> io::Result<Option<Signal>> {
        match read_event()? {
            TuiEvent::Signal(signal) => Ok(Some(signal)),
            TuiEvent::Resize => Ok(None),
        }
    }
}

/// Take over the terminal and present the session until it ends.
pub fn run(session: &Session) -> Result<(), SessionError> {
    let terminal = ratatui::try_init()?;
    let _terminal_guard = TerminalGuard;
    info!("Terminal acquired, presenting {} pages", session.pages().len());

    let config = session.config();
    let mut presenter = TerminalPresenter::new(terminal, config.palette, config.indent);
    session.run(&mut presenter)
}
