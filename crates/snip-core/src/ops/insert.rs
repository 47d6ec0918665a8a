use super::load_snippet_file;
use crate::{Error, Result, Settings};
use snip_blocks::{find_block, overwrite_line};
use snip_fs::{load_lines, save_lines};
use std::path::Path;

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Number of lines that replaced the addressed line.
    pub lines_inserted: usize,
    /// Line count of the target file afterwards.
    pub target_len: usize,
}

/// Replace line `line_number` (1-based) of `target` with the body of the
/// template called `name`, indented like the line it replaces.
///
/// A missing target file is treated as empty and created.
pub fn insert(
    snippet_file: &Path,
    target: &Path,
    name: &str,
    line_number: usize,
    settings: &Settings,
) -> Result<InsertOutcome> {
    if line_number == 0 {
        return Err(snip_blocks::Error::InvalidLineNumber { line: line_number }.into());
    }

    let snippet_lines = load_snippet_file(snippet_file)?;
    let block = find_block(&snippet_lines, name).ok_or_else(|| Error::NotFound {
        name: name.to_string(),
        path: snippet_file.to_path_buf(),
    })?;
    if block.body.is_empty() {
        return Err(Error::EmptyBody {
            name: name.to_string(),
        });
    }

    let mut target_lines = load_lines(target)?.unwrap_or_default();
    overwrite_line(&mut target_lines, line_number, &block.body)?;
    save_lines(target, &target_lines, settings.write_mode)?;

    tracing::debug!(
        template = name,
        target = %target.display(),
        line = line_number,
        "Inserted template"
    );

    Ok(InsertOutcome {
        lines_inserted: block.body.len(),
        target_len: target_lines.len(),
    })
}
