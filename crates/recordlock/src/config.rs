//! # Configuration
//!
//! Configuration is managed by [`confique`], layering an optional TOML file
//! over compiled defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `strict_violations` | `true` | Fail on lock violations (`true`) or ignore them silently (`false`) |
//!
//! ## Example
//!
//! ```toml
//! # recordlock.toml
//! strict_violations = false
//! ```

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};
use crate::lock::ViolationMode;

/// Configuration for records built through [`RecordApi`](crate::api::RecordApi).
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordConfig {
    /// Whether a mutation that breaks a lock returns an error.
    #[config(default = true)]
    pub strict_violations: bool,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            strict_violations: true,
        }
    }
}

impl RecordConfig {
    /// Load configuration, reading `path` if given and present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| RecordError::Config(e.to_string()))
    }

    pub fn violation_mode(&self) -> ViolationMode {
        if self.strict_violations {
            ViolationMode::Strict
        } else {
            ViolationMode::Silent
        }
    }
}
