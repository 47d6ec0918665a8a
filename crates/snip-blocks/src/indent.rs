//! Indentation inference.

/// The leading run of spaces and tabs in `line`.
///
/// Empty when the line is empty or starts with any other character.
pub fn indent_of(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Prefix every line with `indent`, blank lines included.
pub fn apply_indent(indent: &str, lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("{indent}{line}"))
        .collect()
}
