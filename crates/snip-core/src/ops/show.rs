use super::load_snippet_file;
use crate::{Error, Result, Snippet};
use snip_blocks::find_block;
use std::path::Path;

/// Fetch the template called `name` from `snippet_file`.
pub fn show(name: &str, snippet_file: &Path) -> Result<Snippet> {
    let lines = load_snippet_file(snippet_file)?;
    let block = find_block(&lines, name).ok_or_else(|| Error::NotFound {
        name: name.to_string(),
        path: snippet_file.to_path_buf(),
    })?;
    Ok(Snippet::new(block.name, block.body))
}
