//! Immutable log store
//!
//! Every logging call returns a new [`LogStore`] holding all previous entries
//! plus the new one. The store it was called on is never modified, so older
//! snapshots keep seeing exactly the entries they had.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::diagnostics;
use super::entry::{self, LogEntry};
use super::file_writer::{ensure_parent_dir, EntrySink, RotatingFileWriter};
use super::history::History;
use crate::config::LogStoreConfig;
use crate::error::Result;

/// Snapshot of a log lineage
///
/// Cloning is cheap: the entry history, configuration and sink are shared.
#[derive(Clone)]
pub struct LogStore {
    entries: History,
    config: Arc<LogStoreConfig>,
    sink: Arc<dyn EntrySink>,
}

impl LogStore {
    /// Create an empty store writing to the configured file
    ///
    /// The parent directory of the log file is created if missing; the file
    /// itself is not touched until the first entry is logged.
    pub fn create(config: LogStoreConfig) -> Result<Self> {
        Self::with_entries(config, Vec::new())
    }

    /// Create an empty store at `./app.log` with a 1 MiB rotation threshold
    pub fn create_default() -> Result<Self> {
        Self::create(LogStoreConfig::default())
    }

    /// Create a store seeded with `initial` entries
    pub fn with_entries<I>(config: LogStoreConfig, initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = LogEntry>,
    {
        config.validate()?;
        ensure_parent_dir(&config.log_file_path)?;

        let writer = RotatingFileWriter::new(
            config.log_file_path.clone(),
            config.max_file_size_bytes,
        );
        Ok(Self::with_sink(config, Arc::new(writer), initial))
    }

    /// Create a store that hands entries to a custom sink instead of a file
    pub fn with_sink<I>(config: LogStoreConfig, sink: Arc<dyn EntrySink>, initial: I) -> Self
    where
        I: IntoIterator<Item = LogEntry>,
    {
        Self {
            entries: History::from_entries(initial),
            config: Arc::new(config),
            sink,
        }
    }

    /// Log `message` at `level`, returning the extended store
    ///
    /// A failure to persist the entry is reported to the diagnostic sink;
    /// the entry is still part of the returned store.
    #[must_use = "the new entry is only visible through the returned store"]
    pub fn log(&self, level: &str, message: impl Into<String>) -> Self {
        let entry = LogEntry::new(level, message);

        if let Err(err) = self.sink.write_entry(&entry) {
            diagnostics::report(&err);
        }

        Self {
            entries: self.entries.push(entry),
            config: Arc::clone(&self.config),
            sink: Arc::clone(&self.sink),
        }
    }

    #[must_use = "the new entry is only visible through the returned store"]
    pub fn info(&self, message: impl Into<String>) -> Self {
        self.log(entry::INFO, message)
    }

    #[must_use = "the new entry is only visible through the returned store"]
    pub fn warning(&self, message: impl Into<String>) -> Self {
        self.log(entry::WARNING, message)
    }

    #[must_use = "the new entry is only visible through the returned store"]
    pub fn error(&self, message: impl Into<String>) -> Self {
        self.log(entry::ERROR, message)
    }

    /// Get entries in insertion order, optionally only those at `level`
    ///
    /// The level comparison ignores case. `None` or an empty level returns
    /// every entry.
    pub fn get_logs(&self, level: Option<&str>) -> Vec<LogEntry> {
        match level.filter(|l| !l.is_empty()) {
            None => self.entries.to_vec(),
            Some(level) => self
                .entries
                .iter()
                .filter(|e| e.matches_level(level))
                .cloned()
                .collect(),
        }
    }

    /// Iterate entries in insertion order without cloning them
    ///
    /// Each call walks the whole history once to put it in order.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn log_file_path(&self) -> &Path {
        &self.config.log_file_path
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.config.max_file_size_bytes
    }

    pub fn config(&self) -> &LogStoreConfig {
        &self.config
    }

    /// Render every entry on its own line, in insertion order
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::render_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for LogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for LogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStore")
            .field("entries", &self.entries.len())
            .field("log_file_path", &self.config.log_file_path)
            .field("max_file_size_bytes", &self.config.max_file_size_bytes)
            .finish()
    }
}
