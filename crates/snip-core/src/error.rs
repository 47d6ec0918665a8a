//! Error types for snip-core

use std::path::PathBuf;

/// Result type for snip-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file was missing or could not be read or written.
    Io,
    /// The request conflicts with the content (unknown name, bad range, ...).
    Domain,
}

/// Errors that can occur in snippet operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from snip-fs
    #[error(transparent)]
    Fs(#[from] snip_fs::Error),

    /// Splice error from snip-blocks
    #[error(transparent)]
    Blocks(#[from] snip_blocks::Error),

    #[error("Snippet file not found: {path}")]
    SnippetFileMissing { path: PathBuf },

    #[error("Source file not found: {path}")]
    SourceMissing { path: PathBuf },

    #[error("Template '{name}' not found in {path}")]
    NotFound { name: String, path: PathBuf },

    #[error("Template '{name}' already exists in {path}")]
    DuplicateName { name: String, path: PathBuf },

    #[error("Template name cannot be empty")]
    EmptyName,

    #[error("Template name {name:?} must fit on one line")]
    InvalidName { name: String },

    #[error("Invalid line range {start}-{end}: lines start at 1 and the end may not precede the start")]
    InvalidRange { start: usize, end: usize },

    #[error("No lines extracted from {path} for lines {start}-{end}")]
    EmptyRange {
        path: PathBuf,
        start: usize,
        end: usize,
    },

    #[error("Lines {start}-{end} extend past the end of {path} ({len} lines)")]
    RangeOutOfBounds {
        path: PathBuf,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("No lines found for template '{name}'")]
    EmptyBody { name: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fs(_) | Self::SnippetFileMissing { .. } | Self::SourceMissing { .. } => {
                ErrorKind::Io
            }
            Self::Blocks(_)
            | Self::NotFound { .. }
            | Self::DuplicateName { .. }
            | Self::EmptyName
            | Self::InvalidName { .. }
            | Self::InvalidRange { .. }
            | Self::EmptyRange { .. }
            | Self::RangeOutOfBounds { .. }
            | Self::EmptyBody { .. } => ErrorKind::Domain,
        }
    }
}
