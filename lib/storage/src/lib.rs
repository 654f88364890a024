//! # rekom Storage
//!
//! Storage seam for the rekom recommender: the collaborator traits the
//! core consumes, an in-memory implementation, and JSON snapshot
//! persistence.
//!
//! - [`CatalogReader`] - lists the product catalog for a sync pass
//! - [`SnapshotStore`] - holds the vector snapshot with replace-all
//!   semantics
//! - [`MemoryStore`] / [`InMemoryCatalog`] - lock-based in-memory
//!   implementations
//! - [`save_snapshot`] / [`load_snapshot`] - crash-safe JSON persistence

pub mod catalog;
pub mod persistence;
pub mod store;

pub use catalog::{CatalogReader, InMemoryCatalog};
pub use persistence::{load_snapshot, save_snapshot};
pub use store::{CandidateVector, MemoryStore, SnapshotStore};
