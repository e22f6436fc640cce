//! Persistent append-only sequence of log entries
//!
//! Each node points at the node before it, so appending allocates one node
//! and shares the entire existing chain with the previous value.

use std::sync::Arc;

use super::entry::LogEntry;

#[derive(Debug)]
struct Node {
    entry: LogEntry,
    prev: Option<Arc<Node>>,
    len: usize,
}

/// Immutable, structurally shared list of entries in insertion order
#[derive(Debug, Clone, Default)]
pub struct History {
    tail: Option<Arc<Node>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from entries, keeping their order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LogEntry>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |history, entry| history.push(entry))
    }

    /// Return a new history with `entry` appended; `self` is left untouched
    pub fn push(&self, entry: LogEntry) -> Self {
        let len = self.len() + 1;
        Self {
            tail: Some(Arc::new(Node {
                entry,
                prev: self.tail.clone(),
                len,
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.tail.as_ref().map_or(0, |node| node.len)
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Iterate entries oldest first
    ///
    /// The chain links newest to oldest, so this collects `len` references up
    /// front before yielding anything.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        let mut newest_first = Vec::with_capacity(self.len());
        let mut cursor = self.tail.as_deref();
        while let Some(node) = cursor {
            newest_first.push(&node.entry);
            cursor = node.prev.as_deref();
        }
        newest_first.into_iter().rev()
    }

    /// Copy the entries out in insertion order
    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.iter().cloned().collect()
    }
}

impl Drop for History {
    // Unlink iteratively so dropping a long chain cannot overflow the stack.
    fn drop(&mut self) {
        let mut cursor = self.tail.take();
        while let Some(node) = cursor {
            match Arc::try_unwrap(node) {
                Ok(mut node) => cursor = node.prev.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(history: &History) -> Vec<String> {
        history.iter().map(|e| e.message().to_string()).collect()
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.iter().count(), 0);
    }

    #[test]
    fn test_push_preserves_order() {
        let history = History::new()
            .push(LogEntry::new("INFO", "a"))
            .push(LogEntry::new("INFO", "b"))
            .push(LogEntry::new("INFO", "c"));

        assert_eq!(history.len(), 3);
        assert_eq!(messages(&history), vec!["a", "b", "c"]);
        assert_eq!(history.iter().next_back().unwrap().message(), "c");
    }

    #[test]
    fn test_push_leaves_original_untouched() {
        let base = History::new().push(LogEntry::new("INFO", "a"));
        let extended = base.push(LogEntry::new("ERROR", "b"));

        assert_eq!(base.len(), 1);
        assert_eq!(messages(&base), vec!["a"]);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_branches_share_prefix() {
        let base = History::new().push(LogEntry::new("INFO", "shared"));
        let left = base.push(LogEntry::new("INFO", "left"));
        let right = base.push(LogEntry::new("INFO", "right"));

        assert_eq!(messages(&left), vec!["shared", "left"]);
        assert_eq!(messages(&right), vec!["shared", "right"]);
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_from_entries() {
        let history = History::from_entries(vec![
            LogEntry::new("info", "x"),
            LogEntry::new("warning", "y"),
        ]);
        assert_eq!(messages(&history), vec!["x", "y"]);
        assert_eq!(history.to_vec()[1].level(), "WARNING");
    }

    #[test]
    fn test_drop_long_chain() {
        let mut history = History::new();
        for i in 0..200_000 {
            history = history.push(LogEntry::new("INFO", i.to_string()));
        }
        assert_eq!(history.len(), 200_000);
        drop(history);
    }
}
