//! Snippet block parsing.
//!
//! Parses name-tagged blocks in snippet files with the format:
//! ```text
//! #-- name: NAME
//! body lines
//! #-- end
//! ```

/// Literal prefix of a block's header line.
pub const HEADER_PREFIX: &str = "#-- name: ";

/// Literal content of a block's end marker line.
pub const END_MARKER: &str = "#-- end";

/// A parsed block with its name, body and position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The name from the header line.
    pub name: String,
    /// The lines between the header and the end marker.
    pub body: Vec<String>,
    /// The 1-based line number of the header.
    pub start_line: usize,
    /// The 1-based line number of the end marker, or `None` when the input
    /// ends before one appears.
    pub end_line: Option<usize>,
}

impl Block {
    /// The 1-based line numbers this block occupies, header through end
    /// marker (or through `total_lines` for an unterminated block).
    pub fn span(&self, total_lines: usize) -> std::ops::RangeInclusive<usize> {
        self.start_line..=self.end_line.unwrap_or(total_lines)
    }
}

/// Build the header line for `name`.
pub fn header_line(name: &str) -> String {
    format!("{HEADER_PREFIX}{name}")
}

/// Read the block whose header sits at 0-based `header_index`.
fn block_at(lines: &[String], header_index: usize, name: &str) -> Block {
    let body_start = header_index + 1;
    let end_offset = lines[body_start..]
        .iter()
        .position(|line| line == END_MARKER);

    let (body, end_line) = match end_offset {
        Some(offset) => (
            lines[body_start..body_start + offset].to_vec(),
            Some(body_start + offset + 1),
        ),
        None => {
            tracing::warn!(
                block = name,
                line = header_index + 1,
                "Block has no end marker; reading to end of file"
            );
            (lines[body_start..].to_vec(), None)
        }
    };

    Block {
        name: name.to_string(),
        body,
        start_line: header_index + 1,
        end_line,
    }
}

/// Parses every block, in order of appearance.
///
/// Every line starting with the header prefix opens a block, matching
/// [`list_names`].
///
/// # Example
/// ```
/// use snip_blocks::parser::parse_blocks;
///
/// let lines: Vec<String> = ["intro", "#-- name: greet", "hello", "#-- end"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let blocks = parse_blocks(&lines);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].name, "greet");
/// assert_eq!(blocks[0].start_line, 2);
/// assert_eq!(blocks[0].end_line, Some(4));
/// ```
pub fn parse_blocks(lines: &[String]) -> Vec<Block> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            line.strip_prefix(HEADER_PREFIX)
                .map(|name| block_at(lines, index, name))
        })
        .collect()
}

/// Finds the first block whose header is exactly `#-- name: <name>`.
///
/// # Example
/// ```
/// use snip_blocks::parser::find_block;
///
/// let lines: Vec<String> = ["#-- name: t", "p", "q", "#-- end"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let block = find_block(&lines, "t").unwrap();
/// assert_eq!(block.body, vec!["p", "q"]);
/// assert!(find_block(&lines, "missing").is_none());
/// ```
pub fn find_block(lines: &[String], name: &str) -> Option<Block> {
    let header = header_line(name);
    lines
        .iter()
        .position(|line| *line == header)
        .map(|index| block_at(lines, index, name))
}

/// Lists every block name, in file order.
pub fn list_names(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| line.strip_prefix(HEADER_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Checks whether a header for `name` appears anywhere.
pub fn name_exists(lines: &[String], name: &str) -> bool {
    let header = header_line(name);
    lines.iter().any(|line| *line == header)
}
