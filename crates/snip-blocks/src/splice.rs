//! Line splicing.
//!
//! Replaces one addressed line with a run of lines, carrying the addressed
//! line's indentation onto every inserted line.

use crate::error::{Error, Result};
use crate::indent::{apply_indent, indent_of};
use snip_fs::pad_lines;

/// Overwrites line `line_number` (1-based) with `replacement`.
///
/// The sequence is first padded with empty lines so the addressed line
/// exists. Its leading whitespace is applied to every replacement line, then
/// it is removed and the replacement is inserted in its place. The sequence
/// grows by `replacement.len() - 1` lines after padding.
///
/// # Errors
/// Returns `Error::InvalidLineNumber` for line 0.
///
/// # Example
/// ```
/// use snip_blocks::splice::overwrite_line;
///
/// let mut target: Vec<String> = vec!["x".into(), "    y".into(), "z".into()];
/// let body: Vec<String> = vec!["p".into(), "q".into()];
///
/// overwrite_line(&mut target, 2, &body).unwrap();
/// assert_eq!(target, vec!["x", "    p", "    q", "z"]);
/// ```
pub fn overwrite_line(
    lines: &mut Vec<String>,
    line_number: usize,
    replacement: &[String],
) -> Result<()> {
    if line_number == 0 {
        return Err(Error::InvalidLineNumber { line: line_number });
    }

    pad_lines(lines, line_number);

    let index = line_number - 1;
    let indented = apply_indent(indent_of(&lines[index]), replacement);

    tracing::debug!(
        line = line_number,
        inserted = indented.len(),
        "Splicing lines"
    );

    lines.splice(index..=index, indented);
    Ok(())
}
