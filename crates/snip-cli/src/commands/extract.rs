//! Extract command

use std::path::Path;

use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

/// Run the extract command
pub fn run_extract(
    ctx: &AppContext,
    source: &Path,
    start: usize,
    end: usize,
    name: &str,
    snippet_file: &Path,
) -> Result<()> {
    let outcome = snip_core::extract(source, start, end, name, snippet_file, &ctx.settings)?;
    tracing::debug!(lines = outcome.lines, "Template stored");

    println!(
        "{}",
        format!(
            "Extracted lines from {} and saved as template '{}' in snippet file {}.",
            source.display(),
            name,
            snippet_file.display()
        )
        .green()
    );
    Ok(())
}
