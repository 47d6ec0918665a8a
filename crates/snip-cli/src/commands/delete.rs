//! Delete command

use std::path::Path;

use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

/// Run the delete command
pub fn run_delete(ctx: &AppContext, name: &str, snippet_file: &Path) -> Result<()> {
    snip_core::delete(name, snippet_file, &ctx.settings)?;

    println!(
        "{}",
        format!(
            "Deleted template '{}' from {}.",
            name,
            snippet_file.display()
        )
        .green()
    );
    Ok(())
}
