//! Snippet operations for snip
//!
//! Each operation reads whole files through `snip-fs`, transforms the line
//! sequences with `snip-blocks`, and writes the result back. Nothing is
//! written until every check for that operation has passed.
//!
//! ```text
//! extract  source lines [start, end]  ->  new block appended to the snippet file
//! insert   block body                 ->  replaces one line of a target file
//! list     snippet file               ->  block names in file order
//! show     snippet file               ->  one block's header and body
//! delete   snippet file               ->  file rewritten without the block
//! rename   snippet file               ->  file rewritten with a new header
//! ```

pub mod config;
pub mod error;
pub mod ops;
pub mod snippet;

pub use config::{CONFIG_FILENAME, Settings, SnipConfig};
pub use error::{Error, ErrorKind, Result};
pub use ops::{
    ExtractOutcome, InsertOutcome, RenameOutcome, delete, extract, insert, list, rename, show,
};
pub use snippet::Snippet;
pub use snip_fs::WriteMode;
