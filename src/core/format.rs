//! # Slide Formatter
//!
//! Turns a slide's raw paragraphs into the lines drawn on screen:
//!
//! ```text
//! paragraphs ──► "• " prefix ──► join with blank line ──► split on '\n'
//!            ──► wrap(columns - 2 * indent) ──► "  " under wrapped bullets
//! ```
//!
//! Titles are not wrapped. They are upper-cased and centered on the full
//! terminal width, and may overflow on very narrow terminals.

use unicode_width::UnicodeWidthStr;

use super::config::SessionConfig;
use super::error::SessionError;
use super::wrap::wrap;

/// Prefix that aligns wrapped continuation lines under the bullet text.
pub const SECONDARY_INDENT: &str = "  ";

/// Columns available to body text on a terminal `columns` wide.
pub fn body_width(columns: u16, indent: u16) -> usize {
    usize::from(columns).saturating_sub(2 * usize::from(indent))
}

/// Width to wrap at so that indented continuation lines still fit in the
/// body area, which starts `indent` columns in.
pub fn wrap_width(columns: u16, config: &SessionConfig) -> usize {
    let width = body_width(columns, config.indent);
    if config.bullet.is_none() {
        return width;
    }
    let body_area = usize::from(columns).saturating_sub(usize::from(config.indent));
    width.min(body_area.saturating_sub(SECONDARY_INDENT.width()))
}

/// Format a slide body for the given terminal width using the session style.
pub fn format_slide<S: AsRef<str>>(
    paragraphs: &[S],
    config: &SessionConfig,
    columns: u16,
) -> Result<Vec<String>, SessionError> {
    format_paragraphs(paragraphs, config.bullet, wrap_width(columns, config))
}

/// Format paragraphs into display lines no wider than `max_width`
/// (before the secondary indent is applied).
///
/// With bullets on, only the first line of a paragraph carries the bullet;
/// every other non-empty line of that paragraph is a continuation.
pub fn format_paragraphs<S: AsRef<str>>(
    paragraphs: &[S],
    bullet: Option<char>,
    max_width: usize,
) -> Result<Vec<String>, SessionError> {
    if max_width == 0 {
        return Err(SessionError::InvalidWrapWidth(max_width));
    }

    let mut out = Vec::new();
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            out.push(String::new());
        }

        let text = match bullet {
            Some(glyph) => format!("{glyph} {}", paragraph.as_ref()),
            None => paragraph.as_ref().to_string(),
        };
        let lines: Vec<&str> = text.split('\n').collect();
        let wrapped = wrap(lines.as_slice(), max_width)?;

        if bullet.is_none() {
            out.extend(wrapped);
            continue;
        }
        for (j, line) in wrapped.into_iter().enumerate() {
            if j == 0 || line.is_empty() {
                out.push(line);
            } else {
                out.push(format!("{SECONDARY_INDENT}{line}"));
            }
        }
    }
    Ok(out)
}

/// A title ready to draw: upper-cased text and its starting column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenteredTitle {
    pub column: u16,
    pub text: String,
}

pub fn center_title(title: &str, columns: u16) -> CenteredTitle {
    let text = title.to_uppercase();
    let free = usize::from(columns).saturating_sub(text.width());
    CenteredTitle {
        // free <= columns, so the half always fits back into u16
        column: u16::try_from(free / 2).unwrap_or(0),
        text,
    }
}
