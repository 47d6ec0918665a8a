//! A named snippet as shown to users.

use snip_blocks::{END_MARKER, header_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub body: Vec<String>,
}

impl Snippet {
    pub fn new(name: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// The `#-- name: <name>` line that opens this snippet.
    pub fn header(&self) -> String {
        header_line(&self.name)
    }

    /// The header followed by the body, as `show` prints it.
    pub fn to_lines(&self) -> Vec<String> {
        std::iter::once(self.header())
            .chain(self.body.iter().cloned())
            .collect()
    }

    /// The complete block as stored in a snippet file, end marker included.
    pub fn to_block_lines(&self) -> Vec<String> {
        let mut lines = self.to_lines();
        lines.push(END_MARKER.to_string());
        lines
    }
}
