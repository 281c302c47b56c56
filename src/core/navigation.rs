//! # Navigation
//!
//! Every keypress that matters becomes a [`Signal`]. The `update()` function
//! takes the current state and a signal, moves the cursor, and returns an
//! [`Effect`] telling the session loop what to do next. No I/O here.
//!
//! ```text
//! NavigationState + Signal  →  update()  →  Effect::Show(page) | Effect::Exit
//! ```
//!
//! The cursor ranges over `0..=pages.len()`. `cursor == pages.len()` is the
//! exit state and is never rendered.

use log::debug;

use super::pages::{Page, PageList};

/// What the input boundary reports after a page has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Advance,
    Retreat,
    Quit,
}

/// What the session loop should do after a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Show(Page),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    cursor: usize,
    pages: PageList,
}

impl NavigationState {
    pub fn new(pages: PageList) -> Self {
        Self { cursor: 0, pages }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The page under the cursor, or `None` once the session has run off the end.
    pub fn current(&self) -> Option<Page> {
        self.pages.get(self.cursor).copied()
    }

    /// Effect for the current cursor position without moving it.
    pub fn effect(&self) -> Effect {
        self.current().map_or(Effect::Exit, Effect::Show)
    }

    /// Whether the cursor has run off the end of the page list.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.pages.len()
    }
}

/// Apply one signal.
pub fn update(state: &mut NavigationState, signal: Signal) -> Effect {
    match signal {
        Signal::Advance => {
            if state.cursor < state.pages.len() {
                state.cursor += 1;
            }
        }
        Signal::Retreat => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        Signal::Quit => {
            debug!("Quit at page {}/{}", state.cursor + 1, state.pages.len());
            return Effect::Exit;
        }
    }
    debug!(
        "{:?} -> cursor {}/{}",
        signal,
        state.cursor,
        state.pages.len()
    );
    state.effect()
}
