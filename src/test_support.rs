//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use crate::core::content::{Presentation, Slide};
use crate::core::navigation::Signal;
use crate::core::session::{RenderBoundary, RenderedPage};

/// A render boundary that replays a fixed list of signals and records
/// every page it is asked to draw. Quits once the script runs out.
pub struct ScriptedBoundary {
    pub size: (u16, u16),
    pub drawn: Vec<RenderedPage>,
    /// New `(rows, columns)` reported after the first draw.
    pub resize_after_first_draw: Option<(u16, u16)>,
    pub fail_draw: bool,
    script: VecDeque<Option<Signal>>,
}

impl ScriptedBoundary {
    pub fn new(rows: u16, columns: u16, script: Vec<Option<Signal>>) -> Self {
        Self {
            size: (rows, columns),
            drawn: Vec::new(),
            resize_after_first_draw: None,
            fail_draw: false,
            script: script.into(),
        }
    }

    pub fn script_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl RenderBoundary for ScriptedBoundary {
    fn measure(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn draw(&mut self, page: &RenderedPage) -> io::Result<()> {
        if self.fail_draw {
            return Err(io::Error::other("terminal went away"));
        }
        self.drawn.push(page.clone());
        if let Some(size) = self.resize_after_first_draw.take() {
            self.size = size;
        }
        Ok(())
    }

    fn wait_for_signal(&mut self) -> io::Result<Option<Signal>> {
        Ok(self.script.pop_front().unwrap_or(Some(Signal::Quit)))
    }
}

/// Three slides with a title and a conclusion.
pub fn sample_presentation() -> Presentation {
    let slide = |title: &str, paragraphs: &[&str]| Slide {
        title: title.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    };
    Presentation {
        title: "Demo talk".to_string(),
        slides: vec![
            slide("First", &["alpha", "beta"]),
            slide("Second", &["gamma"]),
            slide("Third", &[]),
        ],
        conclusion: Some("Thanks".to_string()),
    }
}
