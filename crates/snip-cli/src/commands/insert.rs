//! Insert command

use std::path::Path;

use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

/// Run the insert command
pub fn run_insert(
    ctx: &AppContext,
    name: &str,
    target: &Path,
    line_number: usize,
    snippet_file: &Path,
) -> Result<()> {
    let outcome = snip_core::insert(snippet_file, target, name, line_number, &ctx.settings)?;
    tracing::debug!(
        lines = outcome.lines_inserted,
        target_len = outcome.target_len,
        "Template inserted"
    );

    println!(
        "{}",
        format!(
            "Inserted snippet '{}' into {} at line {}.",
            name,
            target.display(),
            line_number
        )
        .green()
    );
    Ok(())
}
