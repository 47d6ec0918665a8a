//! Per-run context
//!
//! Resolves the config once and hands commands the write settings and the
//! fallback snippet file.

use std::path::{Path, PathBuf};

use snip_core::{Settings, SnipConfig, WriteMode};

use crate::error::{CliError, Result};

/// Settings shared by every command in one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub settings: Settings,
    default_snippet_file: Option<PathBuf>,
}

impl AppContext {
    /// Build the context for a run started in `cwd`
    ///
    /// `--direct` overrides the configured write mode.
    pub fn resolve(cwd: &Path, config: Option<&Path>, direct: bool) -> Result<Self> {
        let config = SnipConfig::resolve(config, cwd)?;
        let mut settings = config.settings();
        if direct {
            settings = settings.with_write_mode(WriteMode::Direct);
        }
        tracing::debug!(write_mode = %settings.write_mode, "Resolved settings");

        Ok(Self {
            settings,
            default_snippet_file: config.snippet_file,
        })
    }

    /// The snippet file for a command: the argument if given, else the
    /// configured default.
    pub fn snippet_file(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.default_snippet_file.clone())
            .ok_or_else(|| {
                CliError::user(
                    "No snippet file given. Pass one as the last argument, set SNIP_FILE, \
                     or set snippet_file in .snip.toml",
                )
            })
    }
}
