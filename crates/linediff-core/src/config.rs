//! Render configuration.
//!
//! [`RenderConfig`] is a plain value constructed by the caller. It can also be
//! loaded from a TOML file:
//!
//! ```toml
//! suppress_common = true
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use crate::errors::{LineDiffError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how an edit script is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Omit unchanged lines and prefix changed lines with their 1-based
    /// position in their own input. Defaults to `false`.
    pub suppress_common: bool,
}

impl RenderConfig {
    /// Default configuration: every line is printed, changed lines unnumbered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that prints only changed lines, numbered.
    pub fn suppressing_common() -> Self {
        Self {
            suppress_common: true,
        }
    }

    pub fn with_suppress_common(mut self, suppress_common: bool) -> Self {
        self.suppress_common = suppress_common;
        self
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — text is not valid TOML, a value has the wrong type,
    ///   or an unknown key is present
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LineDiffError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` / `Io` / `NotUtf8` — the file cannot be read as text
    /// - `InvalidConfig` — the contents do not parse
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LineDiffError::from_io(path.display().to_string(), &e))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_common_lines() {
        assert!(!RenderConfig::new().suppress_common);
        assert_eq!(RenderConfig::new(), RenderConfig::default());
    }

    #[test]
    fn test_builder_overrides_flag() {
        let config = RenderConfig::suppressing_common().with_suppress_common(false);
        assert_eq!(config, RenderConfig::new());
    }
}
