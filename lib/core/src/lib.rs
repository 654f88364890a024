//! # rekom Core
//!
//! Core library for the rekom product recommender.
//!
//! This crate provides the text-to-vector pipeline and the ranking
//! algorithm:
//!
//! - [`extract`](extract::extract) - targeted feature extraction from
//!   free-text descriptions
//! - [`tfidf`] - term frequency, inverse document frequency, and TF-IDF
//!   composition
//! - [`TfIdfVector`] - sparse term -> weight vector
//! - [`cosine`] / [`rank_top_k`] - similarity scoring and top-k ranking
//! - [`CorpusSnapshot`] - one complete vector set per sync pass
//!
//! Everything here is a pure, deterministic transform over in-memory
//! data. Degenerate inputs (empty descriptions, empty catalogs,
//! zero-magnitude vectors) have defined outputs rather than errors.
//!
//! ## Example
//!
//! ```rust
//! use rekom_core::{rank_top_k, CorpusSnapshot, RawDocument};
//!
//! let catalog = vec![
//!     RawDocument::new(1, "Tas kulit sapi, cocok digunakan untuk kerja."),
//!     RawDocument::new(2, "Dompet kulit sapi, ideal untuk kerja."),
//!     RawDocument::new(3, "Tas berbahan kanvas, warna merah, ideal untuk olahraga."),
//! ];
//! let snapshot = CorpusSnapshot::build(&catalog);
//!
//! let target = &snapshot.get(1).unwrap().vector;
//! let candidates = snapshot
//!     .entries
//!     .iter()
//!     .filter(|(id, _)| **id != 1)
//!     .map(|(id, entry)| (*id, &entry.vector));
//! let ranked = rank_top_k(target, candidates, 4);
//! assert_eq!(ranked[0].id, 2);
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod similarity;
pub mod snapshot;
pub mod tfidf;
pub mod vector;

pub use document::{ProductId, ProductMetadata, RawDocument};
pub use error::{Error, Result};
pub use similarity::{cosine, rank_top_k, Scored};
pub use snapshot::{CorpusSnapshot, VectorEntry};
pub use vector::TfIdfVector;
