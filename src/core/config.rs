//! # Configuration
//!
//! Style settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.termslides/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Everything collapses into one immutable [`SessionConfig`] that the
//! formatter and the page resolver take as an argument.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use super::error::SessionError;
use super::pages::PageRef;
use crate::ColourScheme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StyleFile {
    #[serde(default)]
    pub style: StyleSection,
    pub colours: Option<Palette>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StyleSection {
    pub bullet: Option<String>,
    pub indent: Option<u16>,
    pub scheme: Option<String>,
}

/// An RGB triple, written as `[r, g, b]` in TOML.
pub type Rgb = [u8; 3];

/// The four colours a page is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    #[serde(rename = "title_bkgd")]
    pub title_bg: Rgb,
    #[serde(rename = "text_bkgd")]
    pub body_bg: Rgb,
    #[serde(rename = "title_colr")]
    pub title_fg: Rgb,
    #[serde(rename = "text_colr")]
    pub body_fg: Rgb,
}

impl ColourScheme {
    pub fn palette(self) -> Palette {
        match self {
            ColourScheme::Blue => Palette {
                title_bg: [30, 60, 140],
                body_bg: [10, 20, 50],
                title_fg: [255, 255, 255],
                body_fg: [220, 225, 235],
            },
            ColourScheme::Red => Palette {
                title_bg: [150, 20, 30],
                body_bg: [40, 5, 10],
                title_fg: [255, 240, 240],
                body_fg: [240, 220, 220],
            },
            ColourScheme::Green => Palette {
                title_bg: [20, 110, 50],
                body_bg: [5, 35, 15],
                title_fg: [240, 255, 240],
                body_fg: [220, 240, 225],
            },
            ColourScheme::Black => Palette {
                title_bg: [40, 40, 40],
                body_bg: [0, 0, 0],
                title_fg: [255, 255, 255],
                body_fg: [210, 210, 210],
            },
            ColourScheme::Yellow => Palette {
                title_bg: [200, 160, 0],
                body_bg: [40, 35, 0],
                title_fg: [20, 20, 20],
                body_fg: [250, 240, 200],
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        ColourScheme::default().palette()
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BULLET: char = '•';
pub const DEFAULT_INDENT: u16 = 3;

pub const BULLET_ENV: &str = "TERMSLIDES_BULLET";
pub const SCHEME_ENV: &str = "TERMSLIDES_SCHEME";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Session-wide settings, built once before the first page is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// `None` when bullets are switched off.
    pub bullet: Option<char>,
    /// Base indent of the body text, in columns.
    pub indent: u16,
    pub palette: Palette,
    pub include_title: bool,
    pub include_conclusion: bool,
    /// Explicit page order, if the user gave one.
    pub pages: Option<Vec<PageRef>>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bullet: Some(DEFAULT_BULLET),
            indent: DEFAULT_INDENT,
            palette: Palette::default(),
            include_title: true,
            include_conclusion: true,
            pages: None,
        }
    }
}

/// Values that came from the command line. `None`/`false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub bullet: Option<String>,
    pub no_bullets: bool,
    pub scheme: Option<ColourScheme>,
    pub pages: Option<Vec<PageRef>>,
    pub no_title: bool,
    pub no_conclusion: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.termslides/`, where the config file and the log live.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termslides"))
}

/// Returns the path to `~/.termslides/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load the style file from `~/.termslides/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StyleFile::default()`.
pub fn load_config() -> Result<StyleFile, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default style");
            return Ok(StyleFile::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`], for an explicit path.
pub fn load_config_from(path: &Path) -> Result<StyleFile, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(StyleFile::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StyleFile = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# termslides configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [style]
# bullet = "•"          # Single character, or TERMSLIDES_BULLET
# indent = 3            # Body indent in columns
# scheme = "blue"       # blue, red, green, black, yellow (or TERMSLIDES_SCHEME)

# Custom colours, used when no scheme is named anywhere.
# [colours]
# title_bkgd = [30, 60, 140]
# text_bkgd = [10, 20, 50]
# title_colr = [255, 255, 255]
# text_colr = [220, 225, 235]
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final session config: defaults → config file → env vars → CLI.
pub fn resolve(file: &StyleFile, overrides: &Overrides) -> Result<SessionConfig, SessionError> {
    resolve_with_env(file, overrides, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(
    file: &StyleFile,
    overrides: &Overrides,
    env: F,
) -> Result<SessionConfig, SessionError>
where
    F: Fn(&str) -> Option<String>,
{
    // --no-bullets beats every bullet source, and skips validation
    let bullet = if overrides.no_bullets {
        None
    } else {
        let raw = overrides
            .bullet
            .clone()
            .or_else(|| env(BULLET_ENV))
            .or_else(|| file.style.bullet.clone());
        match raw {
            Some(glyph) => Some(parse_bullet(&glyph)?),
            None => Some(DEFAULT_BULLET),
        }
    };

    // A named scheme anywhere wins over custom file colours
    let scheme = match overrides.scheme {
        Some(scheme) => Some(scheme),
        None => env(SCHEME_ENV)
            .or_else(|| file.style.scheme.clone())
            .map(|name| parse_scheme(&name))
            .transpose()?,
    };
    let palette = match (scheme, file.colours) {
        (Some(scheme), _) => scheme.palette(),
        (None, Some(custom)) => custom,
        (None, None) => Palette::default(),
    };

    Ok(SessionConfig {
        bullet,
        indent: file.style.indent.unwrap_or(DEFAULT_INDENT),
        palette,
        include_title: !overrides.no_title,
        include_conclusion: !overrides.no_conclusion,
        pages: overrides.pages.clone(),
    })
}

/// A bullet must be exactly one character.
pub fn parse_bullet(glyph: &str) -> Result<char, SessionError> {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SessionError::InvalidBulletGlyph(glyph.to_string())),
    }
}

fn parse_scheme(name: &str) -> Result<ColourScheme, SessionError> {
    ColourScheme::from_str(name.trim(), true)
        .map_err(|_| SessionError::UnknownColourScheme(name.to_string()))
}
