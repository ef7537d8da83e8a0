//! Whole-store JSON snapshots.
//!
//! The persisted format is a flat, pretty-printed object of item names to
//! quantities:
//!
//! ```json
//! {
//!   "apple": 7
//! }
//! ```
//!
//! Snapshots are written and replaced wholesale; there is no merging and
//! no locking. Two processes sharing a snapshot path may race, which is an
//! accepted limitation of the tool.

use std::fs;
use std::path::Path;

use thiserror::Error;

use stockbook_inventory::Inventory;

/// Snapshot path used when the caller does not pick one.
pub const DEFAULT_SNAPSHOT_PATH: &str = "inventory.json";

/// Failure while reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file could not be read or written.
    #[error("snapshot io failure: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not a flat JSON object of name-to-quantity pairs.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize the whole store to pretty-printed JSON at `path`,
/// overwriting any previous snapshot.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(inventory)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), items = inventory.len(), "snapshot written");
    Ok(())
}

/// Read and parse the snapshot at `path` into a fresh store.
pub fn load(path: impl AsRef<Path>) -> Result<Inventory, SnapshotError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let inventory: Inventory = serde_json::from_str(&json)?;
    tracing::debug!(path = %path.display(), items = inventory.len(), "snapshot loaded");
    Ok(inventory)
}

/// Replace `inventory` wholesale with the snapshot at `path`.
///
/// Parses before replacing: on any failure the in-memory store is left
/// untouched.
pub fn reload(inventory: &mut Inventory, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    *inventory = load(path)?;
    Ok(())
}
