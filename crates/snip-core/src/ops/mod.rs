//! One module per snippet operation.
//!
//! All operations share the same shape: load whole files, validate, transform
//! the in-memory lines, and write whole files back.

mod delete;
mod extract;
mod insert;
mod list;
mod rename;
mod show;

pub use delete::delete;
pub use extract::{ExtractOutcome, extract};
pub use insert::{InsertOutcome, insert};
pub use list::list;
pub use rename::{RenameOutcome, rename};
pub use show::show;

use crate::{Error, Result};
use snip_blocks::overwrite_line;
use std::path::Path;

/// Check that `name` can be stored in a single header line.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    if name.contains(['\n', '\r']) {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Load a snippet file that must already exist.
fn load_snippet_file(path: &Path) -> Result<Vec<String>> {
    snip_fs::load_lines(path)?.ok_or_else(|| Error::SnippetFileMissing {
        path: path.to_path_buf(),
    })
}

/// Replace the whole content of a sequence by splicing into line 1 of an
/// empty one.
fn rewrite(lines: Vec<String>) -> Result<Vec<String>> {
    let mut rewritten = Vec::with_capacity(lines.len());
    overwrite_line(&mut rewritten, 1, &lines)?;
    Ok(rewritten)
}
