//! # Page Index Resolver
//!
//! Turns the slide count, the title/conclusion switches and an optional
//! explicit page order into the [`PageList`] a session walks.
//!
//! ```text
//! default:   [Title]? Content(0) .. Content(n-1) [Conclusion]?
//! explicit:  the user's refs, in order, repeats allowed  [Conclusion]?
//! ```
//!
//! All jump/skip semantics live here. The navigation controller only ever
//! moves one step at a time over the resolved list.

use std::fmt;
use std::str::FromStr;

use super::error::SessionError;

/// One navigable page of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Title,
    Conclusion,
    /// 0-based slide index, always `< slide_count`.
    Content(usize),
}

pub type PageList = Vec<Page>;

/// A page reference as the user writes it on the command line.
///
/// `title`, `t` and `0` mean the title page; any positive integer is a
/// 1-based slide number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRef {
    Title,
    Slide(usize),
}

impl FromStr for PageRef {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("title") || token.eq_ignore_ascii_case("t") {
            return Ok(PageRef::Title);
        }
        match token.parse::<usize>() {
            Ok(0) => Ok(PageRef::Title),
            Ok(n) => Ok(PageRef::Slide(n)),
            Err(_) => Err(SessionError::InvalidPageReference(format!(
                "{s:?} is neither a page number nor \"title\""
            ))),
        }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Title => write!(f, "title"),
            PageRef::Slide(n) => write!(f, "{n}"),
        }
    }
}

/// Resolve the pages a session will visit.
///
/// Fails on the first explicit reference outside `1..=slide_count`.
pub fn resolve(
    slide_count: usize,
    include_title: bool,
    include_conclusion: bool,
    explicit: Option<&[PageRef]>,
) -> Result<PageList, SessionError> {
    let mut pages = match explicit {
        Some(refs) => refs
            .iter()
            .map(|r| resolve_ref(*r, slide_count))
            .collect::<Result<PageList, _>>()?,
        None => {
            let mut pages = Vec::with_capacity(slide_count + 2);
            if include_title {
                pages.push(Page::Title);
            }
            pages.extend((0..slide_count).map(Page::Content));
            pages
        }
    };

    if include_conclusion {
        pages.push(Page::Conclusion);
    }
    Ok(pages)
}

fn resolve_ref(page: PageRef, slide_count: usize) -> Result<Page, SessionError> {
    match page {
        PageRef::Title => Ok(Page::Title),
        PageRef::Slide(n) if (1..=slide_count).contains(&n) => Ok(Page::Content(n - 1)),
        PageRef::Slide(n) => Err(SessionError::InvalidPageReference(format!(
            "page {n} is out of range (presentation has {slide_count} slides)"
        ))),
    }
}
