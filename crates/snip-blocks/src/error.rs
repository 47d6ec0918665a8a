//! Error types for snip-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid line number {line}: line numbers start at 1")]
    InvalidLineNumber { line: usize },
}
