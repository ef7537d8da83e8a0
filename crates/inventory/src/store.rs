use core::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockbook_core::{StockError, StockResult};

use crate::log::OperationLog;

/// Threshold used by callers that do not pick their own low-stock cutoff.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory stock mapping: item name to quantity on hand.
///
/// Entries iterate in insertion order. Absence of a name means a quantity
/// of zero; `remove` never retains an entry at or below zero.
///
/// The store is a plain value: the caller owns each instance and passes it
/// by reference, so tests construct a fresh one per case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    stock: IndexMap<String, i64>,
}

impl Inventory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of `item`, creating the entry at zero when absent.
    ///
    /// An empty item name is a silent no-op. When a log is supplied, a
    /// timestamped entry is appended for the addition; when omitted,
    /// nothing is recorded.
    pub fn add(&mut self, item: &str, qty: i64, log: Option<&mut OperationLog>) {
        if item.is_empty() {
            return;
        }
        *self.stock.entry(item.to_string()).or_insert(0) += qty;
        if let Some(log) = log {
            log.record_add(item, qty);
        }
    }

    /// Remove `qty` of `item`.
    ///
    /// An absent item is a silent no-op. A quantity driven to zero or
    /// below deletes the entry outright.
    pub fn remove(&mut self, item: &str, qty: i64) {
        let Some(current) = self.stock.get_mut(item) else {
            return;
        };
        *current -= qty;
        if *current <= 0 {
            // shift_remove keeps the remaining entries in insertion order.
            self.stock.shift_remove(item);
        }
    }

    /// Strict lookup of the quantity on hand for `item`.
    ///
    /// Unlike `add`, absence is not defaulted to zero here.
    pub fn quantity(&self, item: &str) -> StockResult<i64> {
        self.stock
            .get(item)
            .copied()
            .ok_or_else(|| StockError::not_found(item))
    }

    /// Names of items whose quantity is strictly below `threshold`, in
    /// insertion order. An item holding exactly `threshold` is not low.
    pub fn low_stock(&self, threshold: i64) -> Vec<&str> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of distinct items currently held.
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stock.iter().map(|(name, qty)| (name.as_str(), *qty))
    }
}

/// Report rendering: one `<item> -> <quantity>` line per entry, in
/// insertion order.
impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, qty) in &self.stock {
            writeln!(f, "{name} -> {qty}")?;
        }
        Ok(())
    }
}
