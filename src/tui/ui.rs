use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::config::{Palette, Rgb};
use crate::core::session::{Banner as BannerKind, RenderedPage};
use crate::tui::component::Component;
use crate::tui::components::{Banner, SlideBody};

/// Header banner: 3 rows starting on row 1, title on its middle row.
const HEADER_TOP: u16 = 1;
const HEADER_HEIGHT: u16 = 3;
const HEADER_TITLE_ROW: u16 = 1;
/// Body text starts below the header and leaves one spare row at the bottom.
const BODY_TOP: u16 = 5;
const BODY_BOTTOM_MARGIN: u16 = 1;

/// Screen regions for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub banner: Rect,
    pub title_row: u16,
    /// `None` on the title page, which has no body.
    pub body: Option<Rect>,
}

pub fn page_areas(area: Rect, kind: BannerKind, indent: u16) -> PageAreas {
    match kind {
        BannerKind::Hero => {
            let height = area.height / 5;
            let banner = Rect {
                x: area.x,
                y: area.y + height * 2,
                width: area.width,
                height,
            };
            PageAreas {
                banner: banner.intersection(area),
                title_row: area.height / 10,
                body: None,
            }
        }
        BannerKind::Header => {
            let banner = Rect {
                x: area.x,
                y: area.y + HEADER_TOP,
                width: area.width,
                height: HEADER_HEIGHT,
            };
            let body = Rect {
                x: area.x + indent.min(area.width),
                y: area.y + BODY_TOP,
                width: area.width.saturating_sub(indent),
                height: area.height.saturating_sub(BODY_TOP + BODY_BOTTOM_MARGIN),
            };
            PageAreas {
                banner: banner.intersection(area),
                title_row: HEADER_TITLE_ROW,
                body: Some(body.intersection(area)),
            }
        }
    }
}

pub fn rgb([r, g, b]: Rgb) -> Color {
    Color::Rgb(r, g, b)
}

pub fn title_style(palette: &Palette) -> Style {
    Style::default()
        .bg(rgb(palette.title_bg))
        .fg(rgb(palette.title_fg))
}

pub fn body_style(palette: &Palette) -> Style {
    Style::default()
        .bg(rgb(palette.body_bg))
        .fg(rgb(palette.body_fg))
}

pub fn draw_page(frame: &mut Frame, page: &RenderedPage, palette: &Palette, indent: u16) {
    let area = frame.area();
    let areas = page_areas(area, page.banner, indent);

    frame.render_widget(Block::default().style(body_style(palette)), area);

    Banner::new(&page.title, areas.title_row, title_style(palette)).render(frame, areas.banner);

    if let Some(body) = areas.body {
        SlideBody::new(&page.lines, body_style(palette)).render(frame, body);
    }
}
