//! Configuration types for capture sessions.
//!
//! This module provides [`CaptureConfig`], which groups the session-level
//! settings. It implements [`serde::Deserialize`] so it can be loaded from
//! external sources.
//!
//! # Example
//!
//! ```
//! # use limner::config::CaptureConfig;
//! let config = CaptureConfig::new("logo");
//! assert_eq!(config.prefix(), "logo");
//!
//! // Or use the default prefix
//! let config = CaptureConfig::default();
//! assert_eq!(config.prefix(), "scene");
//! ```

use serde::Deserialize;

/// Session configuration for paint capture and code generation.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Prefix joined to every generated function and variable name.
    ///
    /// Sanitized to a valid identifier fragment at serialization time, so
    /// any string is acceptable here.
    #[serde(default = "default_prefix")]
    prefix: String,
}

impl CaptureConfig {
    /// Creates a configuration with the given name prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the generated-name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "scene".to_string()
}
