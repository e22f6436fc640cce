//! File persistence with size-based rotation
//!
//! Each write opens the log file in append mode, writes one rendered line and
//! closes it again. A file that has grown past the threshold is renamed to
//! `<path>.<YYYY-MM-DD_HH-MM-SS>` first. No locking is done: two writers
//! sharing a path race on both the rename and the append.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::diagnostics;
use super::entry::LogEntry;
use crate::error::{LogError, Result};

/// Timestamp layout appended to rotated file names
pub const ROTATION_SUFFIX_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Destination for entries produced by a log store
///
/// The store calls this once per logged entry and never looks at the result
/// beyond reporting a failure, so implementations may be best-effort.
pub trait EntrySink: Send + Sync {
    /// Persist a single entry
    fn write_entry(&self, entry: &LogEntry) -> Result<()>;
}

/// Sink that appends to a file and rotates it once it outgrows a limit
#[derive(Debug, Clone)]
pub struct RotatingFileWriter {
    path: PathBuf,
    max_file_size_bytes: u64,
}

impl RotatingFileWriter {
    pub fn new(path: impl Into<PathBuf>, max_file_size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            max_file_size_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }
}

impl EntrySink for RotatingFileWriter {
    fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        write_entry(&self.path, self.max_file_size_bytes, entry)
    }
}

/// Build the name a full log file is renamed to
pub fn rotated_path(path: &Path, now: DateTime<Local>) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(now.format(ROTATION_SUFFIX_FORMAT).to_string());
    PathBuf::from(name)
}

/// Create the parent directory of `path` if it has one and it is missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|source| LogError::DirectoryCreation {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Check whether the file at `path` exists and is larger than `max_size`
pub fn needs_rotation(path: &Path, max_size: u64) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.len() > max_size)
        .unwrap_or(false)
}

/// Rename the file at `path` out of the way, returning the new name
pub fn rotate(path: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let to = rotated_path(path, now);
    fs::rename(path, &to).map_err(|source| LogError::FileRotation {
        from: path.to_path_buf(),
        to: to.clone(),
        source,
    })?;
    tracing::debug!(from = %path.display(), to = %to.display(), "Rotated log file");
    Ok(to)
}

/// Append `entry` to the file at `path`, rotating it first when it has
/// grown past `max_size` bytes
///
/// A failed rotation is reported and the append still goes ahead. Only the
/// append itself can fail this call.
pub fn write_entry(path: &Path, max_size: u64, entry: &LogEntry) -> Result<()> {
    if needs_rotation(path, max_size) {
        if let Err(err) = rotate(path, Local::now()) {
            diagnostics::report(&err);
        }
    }
    append_line(path, entry)
}

fn append_line(path: &Path, entry: &LogEntry) -> Result<()> {
    let to_write_error = |source| LogError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_write_error)?;
    let line = format!("{}\n", entry);
    file.write_all(line.as_bytes()).map_err(to_write_error)
}
