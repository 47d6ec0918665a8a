use super::{load_snippet_file, rewrite, validate_name};
use crate::{Error, Result, Settings};
use snip_blocks::{header_line, name_exists};
use snip_fs::save_lines;
use std::path::Path;

/// Result of a successful rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameOutcome {
    /// False when the old and new names were the same and nothing was
    /// written.
    pub renamed: bool,
}

/// Rewrite the header of template `old_name` to `new_name`, leaving its body
/// and position untouched.
pub fn rename(
    old_name: &str,
    new_name: &str,
    snippet_file: &Path,
    settings: &Settings,
) -> Result<RenameOutcome> {
    validate_name(new_name)?;

    let lines = load_snippet_file(snippet_file)?;
    if !name_exists(&lines, old_name) {
        return Err(Error::NotFound {
            name: old_name.to_string(),
            path: snippet_file.to_path_buf(),
        });
    }
    if old_name == new_name {
        return Ok(RenameOutcome { renamed: false });
    }
    if name_exists(&lines, new_name) {
        return Err(Error::DuplicateName {
            name: new_name.to_string(),
            path: snippet_file.to_path_buf(),
        });
    }

    let old_header = header_line(old_name);
    let renamed: Vec<String> = lines
        .into_iter()
        .map(|line| {
            if line == old_header {
                header_line(new_name)
            } else {
                line
            }
        })
        .collect();

    save_lines(snippet_file, &rewrite(renamed)?, settings.write_mode)?;
    tracing::debug!(from = old_name, to = new_name, "Renamed template");
    Ok(RenameOutcome { renamed: true })
}
