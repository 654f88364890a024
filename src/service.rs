//! Transport-agnostic service layer: the two operations the recommender
//! serves, with their response shapes. HTTP (or any other transport) is
//! a thin wrapper over [`Recommender::sync`] and
//! [`Recommender::recommend`].

use std::collections::HashMap;

use rekom_core::{rank_top_k, CorpusSnapshot, ProductId, ProductMetadata, Result};
use rekom_storage::{CatalogReader, SnapshotStore};
use serde::Serialize;
use tracing::info;

/// Number of recommendations returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_TOP_K: usize = 4;

/// Outcome of one full sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Products processed; zero for an empty catalog, which is success,
    /// not an error.
    pub products: usize,
}

impl SyncReport {
    /// Human-readable outcome line for transports to relay.
    pub fn message(&self) -> String {
        if self.products == 0 {
            "catalog is empty: stored an empty snapshot".to_string()
        } else {
            format!("TF-IDF synced for {} products", self.products)
        }
    }
}

/// One recommended product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationItem {
    pub product_id: ProductId,
    /// Cosine similarity, rounded to 4 decimal places.
    pub similarity: f64,
    /// Display metadata attached at sync time, when the catalog had any.
    #[serde(flatten)]
    pub metadata: Option<ProductMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub target_product_id: ProductId,
    pub recommendations: Vec<RecommendationItem>,
}

/// The recommender service: a catalog reader and a snapshot store wired
/// to the core pipeline. Both collaborators are injected; the service
/// holds no global state of its own.
pub struct Recommender<C, S> {
    catalog: C,
    store: S,
}

impl<C: CatalogReader, S: SnapshotStore> Recommender<C, S> {
    pub fn new(catalog: C, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuild TF-IDF vectors for the entire catalog and replace the
    /// stored snapshot in one step.
    ///
    /// An empty catalog is success: the store ends up with an empty
    /// snapshot and every subsequent recommendation fails with
    /// `VectorNotFound` until products appear and sync runs again.
    pub fn sync(&self) -> Result<SyncReport> {
        let products = self.catalog.list_all_products()?;
        let snapshot = CorpusSnapshot::build(&products);
        let count = snapshot.len();
        self.store.replace_all(snapshot)?;
        info!(products = count, "catalog sync complete");
        Ok(SyncReport { products: count })
    }

    /// The top-k products most similar to `product_id`, by cosine
    /// similarity over the stored snapshot.
    ///
    /// `top_k` defaults to [`DEFAULT_TOP_K`]; zero yields an empty list.
    /// Fails with `VectorNotFound` when the product has no stored vector.
    pub fn recommend(
        &self,
        product_id: ProductId,
        top_k: Option<usize>,
    ) -> Result<RecommendationResponse> {
        let k = top_k.unwrap_or(DEFAULT_TOP_K);
        let target = self.store.get_vector(product_id)?;
        let candidates = self.store.list_vectors_except(product_id)?;

        let mut by_id: HashMap<ProductId, Option<ProductMetadata>> = candidates
            .iter()
            .map(|candidate| (candidate.id, candidate.metadata.clone()))
            .collect();
        let ranked = rank_top_k(
            &target,
            candidates.iter().map(|c| (c.id, &c.vector)),
            k,
        );

        let recommendations: Vec<RecommendationItem> = ranked
            .into_iter()
            .map(|scored| RecommendationItem {
                product_id: scored.id,
                similarity: round4(scored.score),
                metadata: by_id.remove(&scored.id).flatten(),
            })
            .collect();

        info!(
            product = product_id,
            returned = recommendations.len(),
            "served recommendations"
        );
        Ok(RecommendationResponse {
            target_product_id: product_id,
            recommendations,
        })
    }
}

/// Round to 4 decimal places, the precision recommendations are served
/// with.
fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_456), 0.1235);
        assert_eq!(round4(1.0), 1.0);
        assert_eq!(round4(0.999_96), 1.0);
    }

    #[test]
    fn test_sync_report_messages() {
        assert_eq!(
            SyncReport { products: 0 }.message(),
            "catalog is empty: stored an empty snapshot"
        );
        assert_eq!(
            SyncReport { products: 7 }.message(),
            "TF-IDF synced for 7 products"
        );
    }
}
