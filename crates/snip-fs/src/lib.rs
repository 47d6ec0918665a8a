//! File storage for snip
//!
//! Loads files as line sequences, writes them back (atomically by default),
//! and reads format-agnostic configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod lines;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::WriteMode;
pub use lines::{LineEnding, load_lines, pad_lines, save_lines};
