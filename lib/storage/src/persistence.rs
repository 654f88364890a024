//! JSON snapshot persistence.
//!
//! Lets a service restart without an immediate resync: save the snapshot
//! after each sync pass and seed a
//! [`MemoryStore`](crate::store::MemoryStore) from it on startup.

use std::fs;
use std::io::Write;
use std::path::Path;

use atomicwrites::{AllowOverwrite, AtomicFile};
use rekom_core::{CorpusSnapshot, Error, Result};
use tracing::info;

/// Write a snapshot to `path` as JSON.
///
/// The write goes through a temporary file and an atomic rename, so an
/// interrupted save leaves any previously saved snapshot untouched.
pub fn save_snapshot(path: &Path, snapshot: &CorpusSnapshot) -> Result<()> {
    let json = serde_json::to_vec(snapshot)?;
    AtomicFile::new(path, AllowOverwrite)
        .write(|file| file.write_all(&json))
        .map_err(|e| Error::Storage(e.to_string()))?;
    info!(products = snapshot.len(), path = %path.display(), "snapshot saved");
    Ok(())
}

/// Read a snapshot previously written by [`save_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<CorpusSnapshot> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
