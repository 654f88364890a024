use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sparse TF-IDF vector: term -> weight.
///
/// Terms absent from the map have weight zero; [`TfIdfVector::weight`]
/// makes that explicit so no caller has to guess whether a missing key
/// means "zero" or "unknown". A retained entry with value 0.0 is also
/// valid (a term whose IDF is zero, or one missing from the IDF table).
///
/// Backed by a `BTreeMap` so iteration and serialization order are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TfIdfVector {
    weights: BTreeMap<String, f64>,
}

impl TfIdfVector {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of a term; 0.0 when the term is absent.
    #[inline]
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// True when the term has an entry, even one with weight 0.0.
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Euclidean magnitude over this vector's own entries.
    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Number of stored entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, w)| (term.as_str(), *w))
    }
}

impl FromIterator<(String, f64)> for TfIdfVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
