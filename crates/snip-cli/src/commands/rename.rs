//! Rename command

use std::path::Path;

use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

/// Run the rename command
pub fn run_rename(
    ctx: &AppContext,
    old_name: &str,
    new_name: &str,
    snippet_file: &Path,
) -> Result<()> {
    let outcome = snip_core::rename(old_name, new_name, snippet_file, &ctx.settings)?;
    if !outcome.renamed {
        tracing::debug!(name = old_name, "Names are equal, file left untouched");
    }

    println!(
        "{}",
        format!(
            "Renamed template '{}' to '{}' in {}.",
            old_name,
            new_name,
            snippet_file.display()
        )
        .green()
    );
    Ok(())
}
