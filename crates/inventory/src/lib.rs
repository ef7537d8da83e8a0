//! Stock bookkeeping domain module.
//!
//! This crate contains the in-memory stock mapping and its mutation rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod log;
pub mod store;

pub use log::OperationLog;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};


