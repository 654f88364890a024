//! Cosine similarity and top-k ranking over sparse TF-IDF vectors.

use std::cmp::Ordering;

use crate::document::ProductId;
use crate::vector::TfIdfVector;

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub id: ProductId,
    pub score: f64,
}

/// Cosine similarity of two sparse vectors.
///
/// The dot product runs over the union of terms, with absent terms
/// contributing zero; each magnitude depends only on its own vector's
/// entries. When either magnitude is exactly 0.0 (an empty vector, or
/// one whose every weight is zero) the result is 0.0 by definition, not
/// an error. With non-negative TF-IDF weights the result lies in [0, 1].
pub fn cosine(a: &TfIdfVector, b: &TfIdfVector) -> f64 {
    let mag_a = a.magnitude();
    let mag_b = b.magnitude();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    // Iterating the smaller vector covers the union: terms present in
    // only one vector contribute nothing to the dot product.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small.iter().map(|(term, w)| w * large.weight(term)).sum();
    dot / (mag_a * mag_b)
}

/// Score every candidate against the target and keep the best `k`.
///
/// Candidates with similarity <= 0 are excluded entirely, not ranked
/// low. Survivors are sorted by score descending with ascending product
/// id as the tie-break, so results are deterministic regardless of the
/// order the store returned them in. `k` may exceed the candidate count;
/// `k == 0` yields an empty result.
pub fn rank_top_k<'a, I>(target: &TfIdfVector, candidates: I, k: usize) -> Vec<Scored>
where
    I: IntoIterator<Item = (ProductId, &'a TfIdfVector)>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut scored: Vec<Scored> = candidates
        .into_iter()
        .filter_map(|(id, vector)| {
            let score = cosine(target, vector);
            (score > 0.0).then_some(Scored { id, score })
        })
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    scored.truncate(k);
    scored
}
