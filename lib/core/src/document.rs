use serde::{Deserialize, Serialize};

/// Catalog product identifier.
pub type ProductId = u64;

/// Display metadata carried alongside a product's vector so that
/// recommendations can be enriched without a second catalog lookup.
/// Never participates in ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub name: String,
    pub image: String,
    pub stock: u32,
    pub price: f64,
}

/// One catalog entry as the recommender sees it: a unique id, the
/// free-text description that drives feature extraction, and optional
/// display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: ProductId,
    /// May be empty; an empty description simply yields zero features.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProductMetadata>,
}

impl RawDocument {
    #[inline]
    #[must_use]
    pub fn new(id: ProductId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ProductMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
