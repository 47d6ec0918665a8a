//! Configuration for snip
//!
//! A config file is optional. Resolution order:
//! 1. An explicit path (`--config` or `SNIP_CONFIG`), which must exist
//! 2. `.snip.toml` in the working directory, if present
//! 3. Built-in defaults

use crate::Result;
use serde::{Deserialize, Serialize};
use snip_fs::{ConfigStore, WriteMode};
use std::path::{Path, PathBuf};

/// Name of the config file discovered in the working directory.
pub const CONFIG_FILENAME: &str = ".snip.toml";

/// Contents of a snip config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnipConfig {
    /// Snippet file used when a command does not name one.
    pub snippet_file: Option<PathBuf>,

    /// How rewritten files are written.
    pub write_mode: WriteMode,
}

impl SnipConfig {
    /// Load a config file; the format follows its extension.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config");
        Ok(ConfigStore::new().load(path)?)
    }

    /// Resolve the effective config for a run started in `cwd`.
    ///
    /// A relative `snippet_file` inside a config file is taken relative to
    /// the directory holding that file.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let discovered = cwd.join(CONFIG_FILENAME);
                if !discovered.is_file() {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
                discovered
            }
        };

        let mut config = Self::load(&path)?;
        if let Some(file) = config.snippet_file.take() {
            let base = path.parent().unwrap_or(Path::new(""));
            config.snippet_file = Some(base.join(file));
        }
        Ok(config)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            write_mode: self.write_mode,
        }
    }
}

/// Runtime options handed to every mutating operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub write_mode: WriteMode,
}

impl Settings {
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}
