//! List command

use std::path::Path;

use crate::error::Result;

/// Run the list command
///
/// Names go to stdout one per line, undecorated, so the output can be piped.
pub fn run_list(snippet_file: &Path) -> Result<()> {
    let names = snip_core::list(snippet_file)?;

    if names.is_empty() {
        println!("No templates found in {}.", snippet_file.display());
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}
