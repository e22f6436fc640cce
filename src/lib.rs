//! Immutable, append-only logging
//!
//! Each logging call on a [`LogStore`] yields a new store containing every
//! earlier entry plus the new one, and appends the entry to a size-bounded,
//! auto-rotating log file.
//!
//! ```no_run
//! use immutable_log::{LogStore, LogStoreConfig};
//!
//! let store = LogStore::create(LogStoreConfig::default())?;
//! let store = store.info("start").warning("low disk").error("db down");
//! assert_eq!(store.get_logs(Some("warning")).len(), 1);
//! println!("{}", store);
//! # Ok::<(), immutable_log::LogError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::LogStoreConfig;
pub use error::LogError;
pub use logging::{LogEntry, LogStore};
