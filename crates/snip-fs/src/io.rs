//! Whole-file I/O with a choice of write strategy

use crate::{Error, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// How a rewritten file reaches the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the target.
    #[default]
    Atomic,
    /// Truncate the target and write in place.
    Direct,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atomic => write!(f, "atomic"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// Read a file as UTF-8 text.
///
/// A missing file is reported as `Ok(None)`. Content that is not valid
/// UTF-8 is refused with [`Error::NotUtf8`]; it is never decoded lossily.
pub fn read_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(Error::NotUtf8 {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Write `content` to `path` using the given strategy.
///
/// Both strategies write through symlinks to the file they point at, and
/// both refuse an existing target whose permissions are read-only.
pub fn write_with(path: &Path, content: &[u8], mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::Atomic => write_atomic(path, content),
        WriteMode::Direct => write_direct(path, content),
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a failed write never truncates the
/// target. The temp file is held under an exclusive advisory lock while it
/// is written. A symlinked target is resolved first, so the link survives
/// and the file it points at receives the content.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    ensure_parent(&target)?;

    // Same directory keeps the rename on one filesystem
    let temp_path = temp_path_for(&target);

    let result = write_locked(&temp_path, &target, content).and_then(|()| {
        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(&temp_path, meta.permissions())
                .map_err(|e| Error::io(&temp_path, e))?;
        }
        fs::rename(&temp_path, &target).map_err(|e| Error::io(path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Truncate (or create) the file and write content in place.
pub fn write_direct(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    ensure_parent(&target)?;

    let mut file = File::create(&target).map_err(|e| Error::io(path, e))?;
    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// The file a write to `path` should land in.
///
/// Existing paths are canonicalized so symlinks are followed. A path that
/// does not exist yet (or a dangling link) is written as given. An existing
/// read-only file is an error even where the directory would allow the
/// rename.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let target = match dunce::canonicalize(path) {
        Ok(real) => real,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(path.to_path_buf()),
        Err(e) => return Err(Error::io(path, e)),
    };

    let meta = fs::metadata(&target).map_err(|e| Error::io(&target, e))?;
    if meta.is_file() && meta.permissions().readonly() {
        return Err(Error::io(
            path,
            std::io::Error::new(ErrorKind::PermissionDenied, "file is read-only"),
        ));
    }
    Ok(target)
}

fn write_locked(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    FileExt::lock_exclusive(&temp_file).map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}
