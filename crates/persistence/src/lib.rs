//! JSON snapshot persistence for the stock store.
//!
//! The IO edge of the system: everything that touches the filesystem lives
//! here, and nothing in the domain crate does.

pub mod snapshot;

pub use snapshot::{DEFAULT_SNAPSHOT_PATH, SnapshotError, load, reload, save};


