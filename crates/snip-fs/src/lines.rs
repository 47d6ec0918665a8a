//! Line store: files as ordered sequences of lines

use crate::io::{self, WriteMode};
use crate::Result;
use std::path::Path;

/// Line terminator used when a file is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// The dominant terminator in `content`. Ties and text without any
    /// newline count as `Lf`.
    pub fn detect(content: &str) -> Self {
        let crlf = content.matches("\r\n").count();
        let lf = content.matches('\n').count() - crlf;
        if crlf > lf { Self::CrLf } else { Self::Lf }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Load a file as a sequence of lines.
///
/// Lines carry no terminator; a final newline does not produce a trailing
/// empty line, and `\r\n` endings are accepted. Returns `Ok(None)` when the
/// file does not exist. The file must be UTF-8 text (see
/// [`io::read_text`]).
pub fn load_lines(path: &Path) -> Result<Option<Vec<String>>> {
    let Some(content) = io::read_text(path)? else {
        tracing::debug!(path = %path.display(), "File absent");
        return Ok(None);
    };

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "Loaded file");
    Ok(Some(lines))
}

/// Append empty lines until `lines` holds at least `min_len` entries.
pub fn pad_lines(lines: &mut Vec<String>, min_len: usize) {
    if lines.len() < min_len {
        lines.resize(min_len, String::new());
    }
}

/// Write every line followed by a terminator, replacing the file's content.
///
/// The terminator is the existing file's dominant line ending, so a CRLF
/// file stays CRLF. New files are written with `\n`.
pub fn save_lines(path: &Path, lines: &[String], mode: WriteMode) -> Result<()> {
    let ending = io::read_text(path)?
        .map(|existing| LineEnding::detect(&existing))
        .unwrap_or_default();
    let terminator = ending.as_str();

    let capacity = lines.iter().map(|l| l.len() + terminator.len()).sum();
    let mut content = String::with_capacity(capacity);
    for line in lines {
        content.push_str(line);
        content.push_str(terminator);
    }

    tracing::debug!(
        path = %path.display(),
        lines = lines.len(),
        ?ending,
        %mode,
        "Writing file"
    );
    io::write_with(path, content.as_bytes(), mode)
}
