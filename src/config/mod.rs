//! Caret preference parsing.
//!
//! Mirrors the serialized form the host stores for the caret preference: a
//! lowercase style name. Storage, file watching, and reload live with the
//! host application; this module only maps the serialized value to
//! [`CaretStyle`].

use log::warn;
use serde::{Deserialize, Serialize};

use crate::style::CaretStyle;

/// Host configuration sections consumed by the caret policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub caret: CaretConfig,
}

impl Config {
    /// Parse a configuration fragment. Unknown sections are ignored,
    /// missing ones use defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// The `[caret]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaretConfig {
    /// Style name: "block", "underline", or "line" ("bar"/"beam" aliases).
    pub style: String,
}

impl Default for CaretConfig {
    fn default() -> Self {
        Self {
            style: "block".to_owned(),
        }
    }
}

impl CaretConfig {
    /// The typed style this section selects.
    pub fn effective_style(&self) -> CaretStyle {
        parse_caret_style(&self.style)
    }
}

/// Parse a caret style name to `CaretStyle`.
/// Accepts "block", "underline", "line" ("bar"/"beam"). Defaults to Block.
pub fn parse_caret_style(s: &str) -> CaretStyle {
    match s.to_ascii_lowercase().as_str() {
        "block" => CaretStyle::Block,
        "underline" => CaretStyle::Underline,
        "line" | "bar" | "beam" => CaretStyle::Line,
        other => {
            warn!("unknown caret style {other:?}, using block");
            CaretStyle::Block
        }
    }
}
