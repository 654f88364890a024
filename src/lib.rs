//! # rekom
//!
//! A content-based product recommender. Short catalog descriptions are
//! turned into sparse TF-IDF vectors via targeted feature extraction,
//! and similar products are ranked by cosine similarity.
//!
//! Two operations are served:
//!
//! - **sync**: rebuild the TF-IDF vectors for the entire catalog and
//!   replace the stored snapshot wholesale
//! - **recommend**: given a product, return its top-k most similar
//!   products, optionally enriched with display metadata
//!
//! ## Quick Start
//!
//! ```rust
//! use rekom::prelude::*;
//!
//! let catalog = InMemoryCatalog::from_products(vec![
//!     RawDocument::new(1, "Tas kulit sapi, cocok digunakan untuk kerja."),
//!     RawDocument::new(2, "Dompet kulit sapi, ideal untuk kerja."),
//!     RawDocument::new(3, "Tas berbahan kanvas, warna merah, ideal untuk olahraga."),
//! ]);
//! let recommender = Recommender::new(catalog, MemoryStore::new());
//!
//! let report = recommender.sync().unwrap();
//! assert_eq!(report.products, 3);
//!
//! let response = recommender.recommend(1, None).unwrap();
//! assert_eq!(response.recommendations[0].product_id, 2);
//! ```
//!
//! ## Crate Structure
//!
//! - `rekom-core` - the text-to-vector pipeline and ranking algorithm
//! - `rekom-storage` - catalog/snapshot-store traits, in-memory
//!   implementations, JSON persistence
//! - `rekom` (this crate) - the transport-agnostic service layer

pub mod service;

// Re-export core types
pub use rekom_core::{
    cosine, rank_top_k, CorpusSnapshot, Error, ProductId, ProductMetadata, RawDocument, Result,
    Scored, TfIdfVector, VectorEntry,
};

// Re-export storage
pub use rekom_storage::{
    load_snapshot, save_snapshot, CandidateVector, CatalogReader, InMemoryCatalog, MemoryStore,
    SnapshotStore,
};

pub use service::{
    RecommendationItem, RecommendationResponse, Recommender, SyncReport, DEFAULT_TOP_K,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogReader, CorpusSnapshot, Error, InMemoryCatalog, MemoryStore, ProductId,
        ProductMetadata, RawDocument, RecommendationItem, RecommendationResponse, Recommender,
        Result, SnapshotStore, SyncReport, TfIdfVector, DEFAULT_TOP_K,
    };
}
