//! Snippet block handling for snip.
//!
//! Everything here works on in-memory line sequences (`Vec<String>`); reading
//! and writing files is left to `snip-fs`.
//!
//! # Snippet format
//!
//! A snippet file holds named blocks delimited by whole-line markers:
//!
//! ```text
//! #-- name: greet
//! hello
//! world
//! #-- end
//! ```
//!
//! Markers are matched literally. There is no escaping, so a body line that
//! reads exactly `#-- end` closes its block.
//!
//! # Modules
//!
//! - [`parser`]: locate blocks by name, list names, detect duplicates
//! - [`indent`]: infer a line's leading whitespace and apply it to new lines
//! - [`splice`]: replace one addressed line with a run of lines

pub mod error;
pub mod indent;
pub mod parser;
pub mod splice;

pub use error::{Error, Result};
pub use indent::{apply_indent, indent_of};
pub use parser::{
    Block, END_MARKER, HEADER_PREFIX, find_block, header_line, list_names, name_exists,
    parse_blocks,
};
pub use splice::overwrite_line;
