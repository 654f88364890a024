use parking_lot::RwLock;
use rekom_core::{CorpusSnapshot, Error, ProductId, ProductMetadata, Result, TfIdfVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One candidate row from the store: a product's vector plus whatever
/// display metadata was attached at sync time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateVector {
    pub id: ProductId,
    pub vector: TfIdfVector,
    pub metadata: Option<ProductMetadata>,
}

/// The stored vector set behind the recommender.
///
/// `replace_all` must be atomic with respect to readers: no concurrent
/// `get_vector` or `list_vectors_except` call may observe a
/// half-replaced snapshot (some products under the new IDF table, some
/// under the old, some missing). Concurrent replacements are serialized
/// by the implementation; last committed wins. A failed replace leaves
/// the previous snapshot intact.
pub trait SnapshotStore {
    /// Replace the entire stored snapshot in one indivisible step.
    fn replace_all(&self, snapshot: CorpusSnapshot) -> Result<()>;

    /// The stored vector of one product, or
    /// [`Error::VectorNotFound`](rekom_core::Error::VectorNotFound) when
    /// the product has no vector (sync never ran, or the product was
    /// added after the last pass).
    fn get_vector(&self, id: ProductId) -> Result<TfIdfVector>;

    /// Every stored vector except the given product's, with metadata.
    fn list_vectors_except(&self, id: ProductId) -> Result<Vec<CandidateVector>>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<T> {
    fn replace_all(&self, snapshot: CorpusSnapshot) -> Result<()> {
        (**self).replace_all(snapshot)
    }

    fn get_vector(&self, id: ProductId) -> Result<TfIdfVector> {
        (**self).get_vector(id)
    }

    fn list_vectors_except(&self, id: ProductId) -> Result<Vec<CandidateVector>> {
        (**self).list_vectors_except(id)
    }
}

/// In-memory snapshot store.
///
/// The whole snapshot sits behind a single `RwLock` and is swapped
/// wholesale under the write lock, which is what gives readers the
/// all-or-nothing view `SnapshotStore` requires.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<CorpusSnapshot>,
}

impl MemoryStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a previously saved snapshot, e.g. one loaded
    /// via [`load_snapshot`](crate::persistence::load_snapshot).
    #[must_use]
    pub fn with_snapshot(snapshot: CorpusSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    /// Clone of the current snapshot, e.g. for persistence.
    pub fn snapshot(&self) -> CorpusSnapshot {
        self.snapshot.read().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn replace_all(&self, snapshot: CorpusSnapshot) -> Result<()> {
        let mut guard = self.snapshot.write();
        debug!(products = snapshot.len(), "replacing vector snapshot");
        *guard = snapshot;
        Ok(())
    }

    fn get_vector(&self, id: ProductId) -> Result<TfIdfVector> {
        self.snapshot
            .read()
            .get(id)
            .map(|entry| entry.vector.clone())
            .ok_or(Error::VectorNotFound(id))
    }

    fn list_vectors_except(&self, id: ProductId) -> Result<Vec<CandidateVector>> {
        Ok(self
            .snapshot
            .read()
            .entries
            .iter()
            .filter(|(candidate_id, _)| **candidate_id != id)
            .map(|(candidate_id, entry)| CandidateVector {
                id: *candidate_id,
                vector: entry.vector.clone(),
                metadata: entry.metadata.clone(),
            })
            .collect())
    }
}
