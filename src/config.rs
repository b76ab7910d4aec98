// src/config.rs

//! Defines the configuration structures for color parsing and formatting.
//!
//! The structs deserialize from a JSON file. Every field has a default, so a
//! partial file (or none at all) is valid. The process-wide configuration is
//! exposed as [`CONFIG`], loaded once from the path in the
//! `COLORCONV_CONFIG` environment variable.

use std::path::Path;

use anyhow::Context;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::html::HexCase;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "COLORCONV_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(|| match std::env::var_os(CONFIG_ENV_VAR) {
    Some(path) => Config::load_or_default(Path::new(&path)),
    None => Config::default(),
});

/// Root of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// How colors are written out as strings.
    pub output: OutputConfig,
    /// What the hex string parser accepts.
    pub parsing: ParsingConfig,
}

impl Config {
    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reads a config from a JSON file, falling back to defaults on error.
    pub fn load_or_default(path: &Path) -> Config {
        Config::load(path).unwrap_or_else(|e| {
            warn!("{:#}. Using default configuration.", e);
            Config::default()
        })
    }
}

// --- Output Configuration ---

/// Settings for string output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Case of hex digits.
    pub case: HexCase,
    /// Whether to prefix hex strings with `#`. The library serializers never
    /// add one; this only affects callers that honour it.
    pub hash_prefix: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            case: HexCase::Lower,
            hash_prefix: false,
        }
    }
}

// --- Parsing Configuration ---

/// Settings for the hex string parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Color returned when input is malformed and the caller asked for a
    /// fallback instead of an error.
    pub fallback: Color,
    /// Accept `RGB` and `RGBA` shorthand.
    pub allow_short_form: bool,
    /// Accept named colors such as `red` or `navy`.
    pub allow_named: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        ParsingConfig {
            fallback: Color::BLACK,
            allow_short_form: true,
            allow_named: true,
        }
    }
}
