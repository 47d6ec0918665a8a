use super::validate_name;
use crate::{Error, Result, Settings, Snippet};
use snip_blocks::{name_exists, overwrite_line};
use snip_fs::{load_lines, save_lines};
use std::path::Path;

/// Result of a successful extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    /// Number of body lines stored in the new template.
    pub lines: usize,
}

/// Copy lines `start..=end` (1-based) of `source` into a new template called
/// `name`, appended to `snippet_file`.
///
/// A missing snippet file is treated as empty and created.
pub fn extract(
    source: &Path,
    start: usize,
    end: usize,
    name: &str,
    snippet_file: &Path,
    settings: &Settings,
) -> Result<ExtractOutcome> {
    validate_name(name)?;
    if start < 1 || end < start {
        return Err(Error::InvalidRange { start, end });
    }

    let source_lines = load_lines(source)?.ok_or_else(|| Error::SourceMissing {
        path: source.to_path_buf(),
    })?;

    if source_lines.len() < start {
        return Err(Error::EmptyRange {
            path: source.to_path_buf(),
            start,
            end,
        });
    }
    if source_lines.len() < end {
        return Err(Error::RangeOutOfBounds {
            path: source.to_path_buf(),
            start,
            end,
            len: source_lines.len(),
        });
    }

    let mut snippet_lines = load_lines(snippet_file)?.unwrap_or_default();
    if name_exists(&snippet_lines, name) {
        return Err(Error::DuplicateName {
            name: name.to_string(),
            path: snippet_file.to_path_buf(),
        });
    }

    let snippet = Snippet::new(name, source_lines[start - 1..end].to_vec());
    let append_at = snippet_lines.len() + 1;
    overwrite_line(&mut snippet_lines, append_at, &snippet.to_block_lines())?;

    tracing::debug!(
        source = %source.display(),
        template = name,
        start,
        end,
        "Extracted template"
    );
    save_lines(snippet_file, &snippet_lines, settings.write_mode)?;

    Ok(ExtractOutcome {
        lines: snippet.body.len(),
    })
}
