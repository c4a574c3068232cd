//! Rasterization settings.
//!
//! Loaded from YAML; every field has a default so a partial file is valid.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// What to do when a derived semi-axis or focal parameter is not positive.
///
/// Circles are exempt: a zero radius always rasterizes as radius 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Refuse the request with [`Error::DegenerateParameter`]; nothing is drawn.
    #[default]
    Reject,
    /// Rasterize anyway; the rasterizer normalizes the value to 1.
    Clamp,
}

/// Rasterization configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Handling of non-positive ellipse, hyperbola and parabola dimensions.
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,

    /// Samples per parametric segment when a request does not set one.
    #[serde(default = "default_steps")]
    pub steps: u32,

    /// Extent of hyperbolas and parabolas; `None` means `max(50, 5 * param)`.
    #[serde(default)]
    pub conic_limit: Option<u32>,
}

fn default_version() -> u32 {
    1
}
fn default_steps() -> u32 {
    20
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            degenerate_policy: DegeneratePolicy::default(),
            steps: default_steps(),
            conic_limit: None,
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] for a missing file, [`Error::Io`] for
    /// any other read failure and [`Error::ConfigParse`] for invalid YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::debug!("using default configuration: {e}");
            Self::default()
        })
    }
}
