//! # Presentation Session
//!
//! Ties the pieces together:
//!
//! ```text
//! Presentation + SessionConfig ──► Session::new ──► PageList (validated once)
//!                                        │
//!        ┌───────────────────────────────┘
//!        ▼
//!   loop: measure → render_page → draw → wait_for_signal → update
//! ```
//!
//! Everything that can be rejected is rejected before the first draw. The
//! terminal itself sits behind [`RenderBoundary`], so the loop runs the same
//! against a real terminal and against a scripted one in tests.

use std::io;

use log::{debug, info};

use super::config::SessionConfig;
use super::content::Presentation;
use super::error::SessionError;
use super::format::{CenteredTitle, center_title, format_slide, wrap_width};
use super::navigation::{Effect, NavigationState, Signal, update};
use super::pages::{Page, PageList, resolve};

/// Banner height hint for the render boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Tall banner in the middle of the screen, for the title page.
    Hero,
    /// Three-row banner at the top, for slides and the conclusion.
    Header,
}

/// A page with all layout decisions made, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub title: CenteredTitle,
    pub banner: Banner,
    pub lines: Vec<String>,
}

/// The terminal as the session sees it.
pub trait RenderBoundary {
    /// Current surface size as `(rows, columns)`.
    fn measure(&mut self) -> io::Result<(u16, u16)>;

    /// Draw one page, replacing whatever was shown before.
    fn draw(&mut self, page: &RenderedPage) -> io::Result<()>;

    /// Block until the user does something meaningful.
    ///
    /// `None` means the surface changed (e.g. a resize) and the current page
    /// must be drawn again.
    fn wait_for_signal(&mut self) -> io::Result<Option<Signal>>;
}

pub struct Session {
    presentation: Presentation,
    config: SessionConfig,
    pages: PageList,
}

impl Session {
    /// Validate the page selection and fix the page list for the session.
    ///
    /// An empty presentation title suppresses the title page in default mode,
    /// and a missing or empty conclusion suppresses the conclusion page.
    pub fn new(presentation: Presentation, config: SessionConfig) -> Result<Self, SessionError> {
        let include_title = config.include_title && presentation.has_title();
        let include_conclusion = config.include_conclusion && presentation.conclusion().is_some();

        let pages = resolve(
            presentation.slides.len(),
            include_title,
            include_conclusion,
            config.pages.as_deref(),
        )?;
        info!(
            "Session ready: {} pages from {} slides (title: {}, conclusion: {})",
            pages.len(),
            presentation.slides.len(),
            include_title,
            include_conclusion
        );

        Ok(Self {
            presentation,
            config,
            pages,
        })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Lay out one page for a terminal `columns` wide.
    pub fn render_page(&self, page: Page, columns: u16) -> Result<RenderedPage, SessionError> {
        let rendered = match page {
            Page::Title => RenderedPage {
                title: center_title(&self.presentation.title, columns),
                banner: Banner::Hero,
                lines: Vec::new(),
            },
            Page::Conclusion => RenderedPage {
                title: center_title(self.presentation.conclusion().unwrap_or_default(), columns),
                banner: Banner::Header,
                lines: Vec::new(),
            },
            Page::Content(index) => {
                let Some(slide) = self.presentation.slides.get(index) else {
                    return Err(SessionError::InvalidPageReference(format!(
                        "slide index {index} does not exist"
                    )));
                };
                RenderedPage {
                    title: center_title(&slide.title, columns),
                    banner: Banner::Header,
                    lines: format_slide(slide.paragraphs.as_slice(), &self.config, columns)?,
                }
            }
        };
        Ok(rendered)
    }

    /// Run the presentation until the user quits or advances past the end.
    pub fn run<R: RenderBoundary>(&self, boundary: &mut R) -> Result<(), SessionError> {
        let mut nav = NavigationState::new(self.pages.clone());
        let mut effect = nav.effect();

        // A terminal too narrow for any body text is rejected before the first draw
        if effect != Effect::Exit {
            let (_rows, columns) = boundary.measure()?;
            let width = wrap_width(columns, &self.config);
            if width == 0 {
                return Err(SessionError::InvalidWrapWidth(width));
            }
        }

        while let Effect::Show(page) = effect {
            let (_rows, columns) = boundary.measure()?;
            let rendered = self.render_page(page, columns)?;
            debug!("Drawing {:?} at {} columns", page, columns);
            boundary.draw(&rendered)?;

            effect = match boundary.wait_for_signal()? {
                Some(signal) => update(&mut nav, signal),
                None => nav.effect(),
            };
        }

        if nav.is_finished() {
            info!("Presentation finished after {} pages", self.pages.len());
        } else {
            info!("Quit at page {}/{}", nav.cursor() + 1, self.pages.len());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Slide;
    use crate::core::pages::PageRef;
    use crate::test_support::{ScriptedBoundary, sample_presentation};

    fn session(config: SessionConfig) -> Session {
        Session::new(sample_presentation(), config).unwrap()
    }

    #[test]
    fn test_default_pages() {
        let s = session(SessionConfig::default());
        assert_eq!(
            s.pages(),
            &[
                Page::Title,
                Page::Content(0),
                Page::Content(1),
                Page::Content(2),
                Page::Conclusion
            ]
        );
    }

    #[test]
    fn test_empty_title_suppresses_title_page() {
        let presentation = Presentation {
            title: String::new(),
            ..sample_presentation()
        };
        let s = Session::new(presentation, SessionConfig::default()).unwrap();
        assert_eq!(s.pages().first(), Some(&Page::Content(0)));
    }

    #[test]
    fn test_missing_conclusion_suppresses_conclusion_page() {
        let presentation = Presentation {
            conclusion: None,
            ..sample_presentation()
        };
        let s = Session::new(presentation, SessionConfig::default()).unwrap();
        assert_eq!(s.pages().last(), Some(&Page::Content(2)));
    }

    #[test]
    fn test_out_of_range_page_fails_before_rendering() {
        let config = SessionConfig {
            pages: Some(vec![PageRef::Slide(5)]),
            ..Default::default()
        };
        let err = Session::new(sample_presentation(), config).err().unwrap();
        assert!(matches!(err, SessionError::InvalidPageReference(_)));
    }

    #[test]
    fn test_render_title_page() {
        let s = session(SessionConfig::default());
        let page = s.render_page(Page::Title, 20).unwrap();
        assert_eq!(page.banner, Banner::Hero);
        assert_eq!(page.title.text, "DEMO TALK");
        assert_eq!(page.title.column, 5);
        assert!(page.lines.is_empty());
    }

    #[test]
    fn test_render_content_page() {
        let s = session(SessionConfig::default());
        let page = s.render_page(Page::Content(0), 80).unwrap();
        assert_eq!(page.banner, Banner::Header);
        assert_eq!(page.title.text, "FIRST");
        assert_eq!(page.lines, vec!["• alpha", "", "• beta"]);
    }

    #[test]
    fn test_render_conclusion_page() {
        let s = session(SessionConfig::default());
        let page = s.render_page(Page::Conclusion, 80).unwrap();
        assert_eq!(page.banner, Banner::Header);
        assert_eq!(page.title.text, "THANKS");
    }

    #[test]
    fn test_run_walks_forward_to_the_end() {
        let s = session(SessionConfig::default());
        let mut boundary = ScriptedBoundary::new(24, 80, vec![Some(Signal::Advance); 5]);
        s.run(&mut boundary).unwrap();

        let titles: Vec<&str> = boundary.drawn.iter().map(|p| p.title.text.as_str()).collect();
        assert_eq!(titles, vec!["DEMO TALK", "FIRST", "SECOND", "THIRD", "THANKS"]);
        assert!(boundary.script_exhausted());
    }

    #[test]
    fn test_run_retreat_and_quit() {
        let s = session(SessionConfig::default());
        let script = vec![
            Some(Signal::Retreat),
            Some(Signal::Advance),
            Some(Signal::Advance),
            Some(Signal::Retreat),
            Some(Signal::Quit),
        ];
        let mut boundary = ScriptedBoundary::new(24, 80, script);
        s.run(&mut boundary).unwrap();

        let titles: Vec<&str> = boundary.drawn.iter().map(|p| p.title.text.as_str()).collect();
        assert_eq!(titles, vec!["DEMO TALK", "DEMO TALK", "FIRST", "SECOND", "FIRST"]);
    }

    #[test]
    fn test_quit_draws_nothing_more() {
        let s = session(SessionConfig::default());
        let mut boundary = ScriptedBoundary::new(24, 80, vec![Some(Signal::Quit)]);
        s.run(&mut boundary).unwrap();
        assert_eq!(boundary.drawn.len(), 1);
    }

    #[test]
    fn test_redraw_reformats_at_new_width() {
        let presentation = Presentation {
            slides: vec![Slide {
                title: "Wide".to_string(),
                paragraphs: vec!["one two three four".to_string()],
            }],
            ..Default::default()
        };
        let config = SessionConfig {
            include_title: false,
            ..Default::default()
        };
        let s = Session::new(presentation, config).unwrap();
        let mut boundary = ScriptedBoundary::new(24, 80, vec![None, Some(Signal::Quit)]);
        boundary.resize_after_first_draw = Some((24, 16));
        s.run(&mut boundary).unwrap();

        assert_eq!(boundary.drawn.len(), 2);
        assert_eq!(boundary.drawn[0].lines, vec!["• one two three four"]);
        // 16 - 2 * 3 = 10 columns
        assert_eq!(boundary.drawn[1].lines, vec!["• one two", "  three four"]);
    }

    #[test]
    fn test_empty_session_never_draws() {
        let config = SessionConfig {
            pages: Some(Vec::new()),
            include_conclusion: false,
            ..Default::default()
        };
        let s = session(config);
        let mut boundary = ScriptedBoundary::new(24, 80, Vec::new());
        s.run(&mut boundary).unwrap();
        assert!(boundary.drawn.is_empty());
    }

    #[test]
    fn test_too_narrow_terminal_fails_before_drawing_slide() {
        let config = SessionConfig {
            include_title: false,
            ..Default::default()
        };
        let s = session(config);
        let mut boundary = ScriptedBoundary::new(24, 6, vec![Some(Signal::Advance)]);
        let err = s.run(&mut boundary).unwrap_err();
        assert!(matches!(err, SessionError::InvalidWrapWidth(0)));
        assert!(boundary.drawn.is_empty());
    }

    #[test]
    fn test_too_narrow_terminal_fails_before_title_page() {
        let s = session(SessionConfig::default());
        let mut boundary = ScriptedBoundary::new(24, 6, vec![Some(Signal::Advance)]);
        let err = s.run(&mut boundary).unwrap_err();
        assert!(matches!(err, SessionError::InvalidWrapWidth(0)));
        assert!(boundary.drawn.is_empty());
    }

    #[test]
    fn test_shrinking_mid_session_fails_on_next_slide() {
        let s = session(SessionConfig::default());
        let mut boundary = ScriptedBoundary::new(24, 80, vec![Some(Signal::Advance)]);
        boundary.resize_after_first_draw = Some((24, 6));
        let err = s.run(&mut boundary).unwrap_err();
        assert!(matches!(err, SessionError::InvalidWrapWidth(0)));
        assert_eq!(boundary.drawn.len(), 1);
    }

    #[test]
    fn test_boundary_failure_propagates() {
        let s = session(SessionConfig::default());
        let mut boundary = ScriptedBoundary::new(24, 80, Vec::new());
        boundary.fail_draw = true;
        let err = s.run(&mut boundary).unwrap_err();
        assert!(matches!(err, SessionError::Terminal(_)));
    }
}
