//! Validation and session errors.
//!
//! Everything except `Terminal` is detected before the first page is drawn.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SessionError {
    /// Explicit page reference outside `[1, slide_count]`, or not a page at all.
    InvalidPageReference(String),
    /// Wrap width of zero columns (terminal narrower than the indents).
    InvalidWrapWidth(usize),
    /// Bullet glyph that is not exactly one character.
    InvalidBulletGlyph(String),
    /// Colour scheme name that matches no built-in scheme.
    UnknownColourScheme(String),
    /// Failure reported by the render boundary. Fatal.
    Terminal(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidPageReference(msg) => write!(f, "invalid page reference: {msg}"),
            SessionError::InvalidWrapWidth(width) => {
                write!(f, "invalid wrap width {width}: terminal is too narrow")
            }
            SessionError::InvalidBulletGlyph(glyph) => {
                write!(f, "bullet point must be a single character, got {glyph:?}")
            }
            SessionError::UnknownColourScheme(name) => write!(f, "no such colour scheme: {name}"),
            SessionError::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Terminal(e)
    }
}
