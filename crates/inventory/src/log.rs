//! Caller-owned record of stock additions.

use chrono::Utc;

/// Ordered, human-readable record of `add` operations.
///
/// The store only appends; the caller owns the log and decides its
/// lifetime. Entries carry the wall-clock time of the addition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationLog {
    entries: Vec<String>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in append order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record_add(&mut self, item: &str, qty: i64) {
        let at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        self.entries.push(format!("{at}: added {qty} of {item}"));
    }
}
