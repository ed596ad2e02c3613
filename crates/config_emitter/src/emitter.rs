//! Config emitter: renders and writes one config file per user id.
//!
//! Ids are processed in ascending order. The first write failure stops the
//! run; files already written stay on disk and later ids are never touched.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::{EmitterConfig, FIRST_UID, LAST_UID};
use crate::error::EmitError;
use crate::user::{config_file_name, render_user_config};

/// Outcome of a successful emitter run.
#[derive(Debug, Clone, Default)]
pub struct EmitReport {
    /// Paths written, in the order they were written.
    pub written: Vec<PathBuf>,
}

impl EmitReport {
    /// Number of files written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Returns `true` if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// Writes `user_<uid>.yml` for every uid in [`FIRST_UID`]..=[`LAST_UID`].
#[derive(Debug)]
pub struct ConfigEmitter {
    config: EmitterConfig,
}

impl ConfigEmitter {
    /// Create a new emitter.
    #[must_use]
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// The user ids this emitter writes, in write order.
    #[must_use]
    pub fn uids(&self) -> RangeInclusive<u32> {
        FIRST_UID..=LAST_UID
    }

    /// Path of the config file for `uid`.
    #[must_use]
    pub fn path_for(&self, uid: u32) -> PathBuf {
        self.config.output_dir().join(config_file_name(uid))
    }

    /// Render and write every config file.
    ///
    /// Existing files are truncated and overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Write`] for the first file that could not be
    /// written, or [`EmitError::Template`] if rendering fails.
    pub fn run(&self) -> Result<EmitReport, EmitError> {
        let dir = self.config.output_dir();
        info!(
            dir = %dir.display(),
            first = FIRST_UID,
            last = LAST_UID,
            "emitting user configs"
        );

        let mut report = EmitReport::default();
        for uid in self.uids() {
            let text = render_user_config(uid)?;
            let path = self.path_for(uid);
            write_config(&path, &text)?;
            debug!(uid, path = %path.display(), "wrote config");
            report.written.push(path);
        }

        info!(count = report.len(), dir = %dir.display(), "user configs written");
        Ok(report)
    }
}

fn write_config(path: &Path, text: &str) -> Result<(), EmitError> {
    std::fs::write(path, text).map_err(|source| {
        error!(path = %path.display(), %source, "failed to write config");
        EmitError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
