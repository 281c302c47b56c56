//! termslides library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Built-in colour schemes, selectable by name or first letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourScheme {
    #[default]
    #[value(alias = "b")]
    Blue,
    #[value(alias = "r")]
    Red,
    #[value(alias = "g")]
    Green,
    #[value(alias = "l")]
    Black,
    #[value(alias = "y")]
    Yellow,
}
