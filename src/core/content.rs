//! # Presentation Content
//!
//! Loads the slide document. TOML is the native format; `.json` files are
//! read with `serde_json` and `.yaml`/`.yml` files with `serde_yaml`. All
//! three map onto the same structs:
//!
//! ```toml
//! title = "Rust in the terminal"
//! conclusion = "Questions?"
//!
//! [[slides]]
//! title = "Why"
//! paragraphs = ["Fast", "Safe"]
//! ```
//!
//! `bulletpoints` is accepted as an alias for `paragraphs`.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "bulletpoints")]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Presentation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
    pub conclusion: Option<String>,
}

impl Presentation {
    /// Whether there is a title worth a page of its own.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// The conclusion text, if there is one worth showing.
    pub fn conclusion(&self) -> Option<&str> {
        self.conclusion
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "could not read slides: {e}"),
            ContentError::Toml(e) => write!(f, "slides parse error: {e}"),
            ContentError::Json(e) => write!(f, "slides parse error: {e}"),
            ContentError::Yaml(e) => write!(f, "slides parse error: {e}"),
        }
    }
}

impl std::error::Error for ContentError {}

/// Read a presentation from disk, picking the format from the extension.
pub fn load(path: &Path) -> Result<Presentation, ContentError> {
    let contents = fs::read_to_string(path).map_err(ContentError::Io)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let presentation: Presentation = match extension.as_deref() {
        Some("json") => serde_json::from_str(&contents).map_err(ContentError::Json)?,
        Some("yaml" | "yml") => serde_yaml::from_str(&contents).map_err(ContentError::Yaml)?,
        _ => parse_toml(&contents)?,
    };
    info!(
        "Loaded {} slides from {}",
        presentation.slides.len(),
        path.display()
    );
    Ok(presentation)
}

pub fn parse_toml(contents: &str) -> Result<Presentation, ContentError> {
    toml::from_str(contents).map_err(ContentError::Toml)
}
