//! Emitter configuration.

use std::path::{Path, PathBuf};

/// First user id emitted.
pub const FIRST_UID: u32 = 1;

/// Last user id emitted (inclusive).
pub const LAST_UID: u32 = 100;

/// Configuration for a [`ConfigEmitter`](crate::ConfigEmitter) run.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Directory the `user_<uid>.yml` files are written into.
    pub output_dir: PathBuf,
}

impl EmitterConfig {
    /// Create a config targeting the current working directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }

    /// Write into `dir` instead of the current working directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new()
    }
}
