//! Show command

use std::path::Path;

use crate::error::Result;

/// Run the show command
pub fn run_show(name: &str, snippet_file: &Path) -> Result<()> {
    let snippet = snip_core::show(name, snippet_file)?;

    for line in snippet.to_lines() {
        println!("{}", line);
    }
    Ok(())
}
