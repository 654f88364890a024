//! TF, IDF, and TF-IDF composition.
//!
//! All three functions are pure and total: empty token sequences and
//! empty corpora produce empty maps, never errors.

use std::collections::BTreeMap;

use ahash::AHashSet;

use crate::vector::TfIdfVector;

/// Term frequencies of one document: occurrence counts normalized by the
/// total token count, so non-empty results sum to 1.0.
pub fn term_frequencies(tokens: &[String]) -> BTreeMap<String, f64> {
    if tokens.is_empty() {
        return BTreeMap::new();
    }
    let total = tokens.len() as f64;
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count as f64 / total))
        .collect()
}

/// Corpus-wide inverse document frequencies.
///
/// For every distinct term across the corpus, idf = ln(N / doc_count),
/// where doc_count is the number of documents containing the term at
/// least once and N counts every document, including those with no
/// tokens. Terms only come from the corpus itself, so doc_count >= 1 and
/// the ratio is always finite; idf is 0 exactly for terms present in
/// every document.
pub fn inverse_document_frequencies(docs: &[Vec<String>]) -> BTreeMap<String, f64> {
    let n = docs.len();
    if n == 0 {
        return BTreeMap::new();
    }
    let mut doc_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in docs {
        let distinct: AHashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in distinct {
            *doc_counts.entry(term).or_insert(0) += 1;
        }
    }
    doc_counts
        .into_iter()
        .map(|(term, doc_count)| (term.to_string(), (n as f64 / doc_count as f64).ln()))
        .collect()
}

/// Compose a sparse TF-IDF vector from one document's TF map and the
/// shared IDF table.
///
/// Only terms already present in the TF map appear in the result. A term
/// missing from the IDF table (possible only when the table was built
/// over a different corpus) keeps a sparse entry with weight 0.0 rather
/// than being dropped.
pub fn weigh(tf: &BTreeMap<String, f64>, idf: &BTreeMap<String, f64>) -> TfIdfVector {
    tf.iter()
        .map(|(term, frequency)| {
            let weight = frequency * idf.get(term).copied().unwrap_or(0.0);
            (term.clone(), weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tf_empty_tokens() {
        assert!(term_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_tf_counts_normalized_by_length() {
        let tf = term_frequencies(&doc(&["hitam", "hitam", "kerja"]));
        assert_eq!(tf.len(), 2);
        assert!((tf["hitam"] - 2.0 / 3.0).abs() < 1e-12);
        assert!((tf["kerja"] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tf_sums_to_one() {
        let tf = term_frequencies(&doc(&["a", "b", "b", "c", "c", "c"]));
        let sum: f64 = tf.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_idf_empty_corpus() {
        assert!(inverse_document_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_idf_counts_documents_not_occurrences() {
        // "sapi" occurs three times but only in one of three documents.
        let corpus = vec![doc(&["sapi", "sapi", "sapi"]), doc(&["kerja"]), doc(&[])];
        let idf = inverse_document_frequencies(&corpus);
        assert!((idf["sapi"] - 3.0_f64.ln()).abs() < 1e-12);
        assert!((idf["kerja"] - 3.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_zero_for_ubiquitous_term() {
        let corpus = vec![doc(&["kerja", "sapi"]), doc(&["kerja"])];
        let idf = inverse_document_frequencies(&corpus);
        assert_eq!(idf["kerja"], 0.0);
        assert!((idf["sapi"] - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_empty_documents_still_count_toward_n() {
        let corpus = vec![doc(&["sapi"]), doc(&[]), doc(&[]), doc(&[])];
        let idf = inverse_document_frequencies(&corpus);
        assert!((idf["sapi"] - 4.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_never_negative() {
        let corpus = vec![
            doc(&["a", "b"]),
            doc(&["b", "c"]),
            doc(&["c", "a"]),
            doc(&["a", "b", "c"]),
        ];
        for (_, value) in inverse_document_frequencies(&corpus) {
            assert!(value >= 0.0);
        }
    }

    #[test]
    fn test_weigh_multiplies_tf_by_idf() {
        let tf = term_frequencies(&doc(&["sapi", "kerja"]));
        let idf: BTreeMap<String, f64> =
            [("sapi".to_string(), 2.0_f64.ln()), ("kerja".to_string(), 0.0)]
                .into_iter()
                .collect();
        let vector = weigh(&tf, &idf);
        assert!((vector.weight("sapi") - 0.5 * 2.0_f64.ln()).abs() < 1e-12);
        assert_eq!(vector.weight("kerja"), 0.0);
        assert!(vector.contains("kerja"));
    }

    #[test]
    fn test_weigh_term_missing_from_idf_kept_at_zero() {
        let tf = term_frequencies(&doc(&["sapi"]));
        let vector = weigh(&tf, &BTreeMap::new());
        assert_eq!(vector.len(), 1);
        assert_eq!(vector.weight("sapi"), 0.0);
        assert!(vector.contains("sapi"));
    }

    #[test]
    fn test_weigh_never_introduces_terms() {
        let tf = term_frequencies(&doc(&["sapi"]));
        let idf: BTreeMap<String, f64> = [
            ("sapi".to_string(), 1.0),
            ("domba".to_string(), 1.0),
        ]
        .into_iter()
        .collect();
        let vector = weigh(&tf, &idf);
        assert_eq!(vector.len(), 1);
        assert!(!vector.contains("domba"));
    }
}
