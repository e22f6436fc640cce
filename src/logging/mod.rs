//! Immutable log store with file persistence
//!
//! Provides the append-only [`LogStore`], its entries, and the rotating file
//! writer it persists through.

pub mod diagnostics;
pub mod entry;
pub mod file_writer;
pub mod history;
pub mod store;

pub use diagnostics::init_diagnostics;
pub use entry::LogEntry;
pub use file_writer::{write_entry, EntrySink, RotatingFileWriter};
pub use history::History;
pub use store::LogStore;
