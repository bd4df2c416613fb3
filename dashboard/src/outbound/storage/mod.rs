//! Operator-local key/value persistence.
//!
//! Each key is one file under the dashboard data directory, replaced
//! atomically on every write.

mod atomic_io;
mod file_store;

pub use file_store::FileKeyValueStore;
