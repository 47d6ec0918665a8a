use super::{load_snippet_file, rewrite};
use crate::{Error, Result, Settings};
use snip_blocks::parse_blocks;
use snip_fs::save_lines;
use std::path::Path;

/// Remove the template called `name`, header through end marker, from
/// `snippet_file`. Every other line keeps its content and order.
///
/// A template without an end marker is removed through the end of the file.
pub fn delete(name: &str, snippet_file: &Path, settings: &Settings) -> Result<()> {
    let lines = load_snippet_file(snippet_file)?;

    let mut removed = vec![false; lines.len()];
    let mut found = false;
    for block in parse_blocks(&lines).iter().filter(|b| b.name == name) {
        found = true;
        for line_number in block.span(lines.len()) {
            removed[line_number - 1] = true;
        }
    }

    if !found {
        return Err(Error::NotFound {
            name: name.to_string(),
            path: snippet_file.to_path_buf(),
        });
    }

    let kept: Vec<String> = lines
        .into_iter()
        .zip(removed)
        .filter_map(|(line, gone)| (!gone).then_some(line))
        .collect();

    save_lines(snippet_file, &rewrite(kept)?, settings.write_mode)?;
    tracing::debug!(template = name, "Deleted template");
    Ok(())
}
