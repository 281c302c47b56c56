use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// The body text of a slide.
///
/// Lines arrive already wrapped and indented by the core formatter, so the
/// paragraph is drawn without ratatui's own wrapping. Anything taller than
/// the area is clipped by the buffer.
pub struct SlideBody<'a> {
    pub lines: &'a [String],
    pub style: Style,
}

impl<'a> SlideBody<'a> {
    pub fn new(lines: &'a [String], style: Style) -> Self {
        Self { lines, style }
    }
}

impl Component for SlideBody<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|line| Line::raw(line.as_str()))
            .collect();
        frame.render_widget(Paragraph::new(lines).style(self.style), area);
    }
}
