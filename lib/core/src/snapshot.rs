//! Corpus snapshots: one complete, internally consistent vector set per
//! sync pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::{ProductId, ProductMetadata, RawDocument};
use crate::extract::extract;
use crate::tfidf::{inverse_document_frequencies, term_frequencies, weigh};
use crate::vector::TfIdfVector;

/// Everything stored for one product after a sync pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorEntry {
    /// The token sequence the vector was built from, kept for inspection.
    pub tokens: Vec<String>,
    pub vector: TfIdfVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProductMetadata>,
}

/// The full vector set produced by one sync pass, together with the IDF
/// table every vector in it was weighted with.
///
/// Vectors from different snapshots were built under different IDF
/// tables and must never be compared, so stores replace a snapshot
/// wholesale rather than patching individual entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    pub entries: BTreeMap<ProductId, VectorEntry>,
    pub idf: BTreeMap<String, f64>,
}

impl CorpusSnapshot {
    /// Build a snapshot from the whole catalog.
    ///
    /// Extracts the feature tokens of every document, computes one IDF
    /// table over all of them (documents with no features still count
    /// toward N), then weights each document's TF map with that shared
    /// table. An empty catalog gives an empty snapshot, which is a valid
    /// state: no recommendations are possible afterward.
    pub fn build(catalog: &[RawDocument]) -> Self {
        let docs: Vec<Vec<String>> = catalog
            .iter()
            .map(|product| extract(&product.description))
            .collect();
        let idf = inverse_document_frequencies(&docs);

        let mut entries = BTreeMap::new();
        for (product, tokens) in catalog.iter().zip(docs) {
            let tf = term_frequencies(&tokens);
            let vector = weigh(&tf, &idf);
            entries.insert(
                product.id,
                VectorEntry {
                    tokens,
                    vector,
                    metadata: product.metadata.clone(),
                },
            );
        }
        Self { entries, idf }
    }

    pub fn get(&self, id: ProductId) -> Option<&VectorEntry> {
        self.entries.get(&id)
    }

    /// Number of products in the snapshot.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_gives_empty_snapshot() {
        let snapshot = CorpusSnapshot::build(&[]);
        assert!(snapshot.is_empty());
        assert!(snapshot.idf.is_empty());
    }

    #[test]
    fn test_all_documents_share_one_idf_table() {
        let catalog = vec![
            RawDocument::new(1, "Tas kulit sapi, cocok digunakan untuk kerja."),
            RawDocument::new(2, "Dompet kulit domba, ideal untuk kerja."),
            RawDocument::new(3, "Tas berbahan kanvas, warna merah, ideal untuk olahraga."),
        ];
        let snapshot = CorpusSnapshot::build(&catalog);
        assert_eq!(snapshot.len(), 3);

        // "kerja" appears in 2 of 3 documents.
        assert!((snapshot.idf["kerja"] - (3.0_f64 / 2.0).ln()).abs() < 1e-12);
        // Every entry's weights come from that same table.
        let entry = snapshot.get(1).unwrap();
        assert_eq!(entry.tokens, vec!["sapi", "kerja"]);
        assert!((entry.vector.weight("kerja") - 0.5 * (3.0_f64 / 2.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_featureless_document_gets_empty_vector() {
        let catalog = vec![
            RawDocument::new(1, "Tas kulit sapi, ideal untuk kerja."),
            RawDocument::new(2, ""),
        ];
        let snapshot = CorpusSnapshot::build(&catalog);
        let degenerate = snapshot.get(2).unwrap();
        assert!(degenerate.tokens.is_empty());
        assert!(degenerate.vector.is_empty());
        // The empty document still counted toward N.
        assert!((snapshot.idf["sapi"] - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_identical_descriptions_give_identical_vectors() {
        let description = "Tas kulit sapi warna hitam, cocok digunakan untuk kerja.";
        let catalog = vec![
            RawDocument::new(1, description),
            RawDocument::new(2, description),
            RawDocument::new(3, "Dompet berbahan kanvas, berwarna coklat."),
        ];
        let snapshot = CorpusSnapshot::build(&catalog);
        assert_eq!(
            snapshot.get(1).unwrap().vector,
            snapshot.get(2).unwrap().vector
        );
    }

    #[test]
    fn test_metadata_travels_into_entry() {
        let catalog = vec![RawDocument::new(1, "Tas kulit sapi, ideal untuk kerja.")
            .with_metadata(ProductMetadata {
                name: "Tas Kerja".to_string(),
                image: "tas-kerja.jpg".to_string(),
                stock: 12,
                price: 250_000.0,
            })];
        let snapshot = CorpusSnapshot::build(&catalog);
        let metadata = snapshot.get(1).unwrap().metadata.as_ref().unwrap();
        assert_eq!(metadata.name, "Tas Kerja");
    }
}
