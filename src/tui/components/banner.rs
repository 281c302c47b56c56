//! # Banner Component
//!
//! The coloured band that carries a page title.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! `Banner` is purely presentational. It receives the already centered title
//! and the row to put it on, so it does no layout of its own:
//!
//! ```rust,ignore
//! let mut banner = Banner {
//!     title: &page.title,
//!     title_row: 1,
//!     style: Style::default().bg(Color::Blue),
//! };
//! banner.render(frame, banner_area);
//! ```
//!
//! The title column comes from the core formatter, which measures display
//! width, so wide glyphs center the same way they wrap.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::core::format::CenteredTitle;
use crate::tui::component::Component;

pub struct Banner<'a> {
    pub title: &'a CenteredTitle,
    /// Row inside the banner the title sits on.
    pub title_row: u16,
    pub style: Style,
}

impl<'a> Banner<'a> {
    pub fn new(title: &'a CenteredTitle, title_row: u16, style: Style) -> Self {
        Self {
            title,
            title_row,
            style,
        }
    }
}

impl Component for Banner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(self.style), area);

        if self.title_row >= area.height || self.title.column >= area.width {
            return;
        }
        let title_area = Rect {
            x: area.x + self.title.column,
            y: area.y + self.title_row,
            width: area.width - self.title.column,
            height: 1,
        };
        let span = Span::styled(
            self.title.text.as_str(),
            self.style.add_modifier(Modifier::UNDERLINED),
        );
        frame.render_widget(span, title_area);
    }
}
