//! Targeted feature extraction from product descriptions.
//!
//! Catalog descriptions follow a loose template ("Tas kulit sapi, warna
//! hitam, cocok digunakan untuk kerja."), so instead of indexing every
//! word we pull out three signal spans - material, color, and intended
//! function - and tokenize only those. Everything else in the text is
//! noise for similarity purposes.

use std::sync::OnceLock;

use ahash::AHashSet;
use regex::Regex;

/// Words too common in this catalog to discriminate between products:
/// Indonesian connectives plus catalog-generic nouns that show up in
/// nearly every description.
const STOPWORDS: &[&str] = &[
    "yang", "dan", "untuk", "dari", "pada", "dengan", "oleh", "atau", "juga",
    "dalam", "ke", "di", "ini", "itu", "sebagai", "adalah", "dapat",
    "digunakan", "cocok", "guna", "tas", "kulit", "warna", "berwarna", "asli",
];

struct SignalPatterns {
    material: Regex,
    color: Regex,
    function: Regex,
    word: Regex,
}

static PATTERNS: OnceLock<SignalPatterns> = OnceLock::new();
static STOPWORD_SET: OnceLock<AHashSet<&'static str>> = OnceLock::new();

fn patterns() -> &'static SignalPatterns {
    PATTERNS.get_or_init(|| SignalPatterns {
        material: Regex::new(r"(?:kulit|berbahan)\s+([a-z\s]+?)(?:,|\.)")
            .expect("static material pattern"),
        color: Regex::new(r"(?:warna|berwarna)\s+([a-z\s]+?)(?:,|\.)")
            .expect("static color pattern"),
        function: Regex::new(
            r"(?:cocok digunakan untuk|digunakan untuk|ideal untuk)\s+([a-z\s]+?)(?:,|\.)",
        )
        .expect("static function pattern"),
        word: Regex::new(r"\b\w+\b").expect("static word pattern"),
    })
}

fn stopwords() -> &'static AHashSet<&'static str> {
    STOPWORD_SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Extract the feature tokens of one description.
///
/// The three signal patterns are tried independently against the
/// lowercased text; each contributes the capture of its first match, a
/// short span terminated by a comma or period. The captured spans are
/// joined, split into alphanumeric words, and filtered against the
/// stopword set. Repeated tokens are kept - frequency counting downstream
/// needs them.
///
/// Never fails: a description with no matching span (including the empty
/// string) yields an empty sequence.
pub fn extract(description: &str) -> Vec<String> {
    let text = description.to_lowercase();
    let p = patterns();

    let mut spans: Vec<&str> = Vec::new();
    for pattern in [&p.material, &p.color, &p.function] {
        if let Some(captures) = pattern.captures(&text) {
            if let Some(span) = captures.get(1) {
                spans.push(span.as_str());
            }
        }
    }

    let joined = spans.join(" ");
    let stop = stopwords();
    p.word
        .find_iter(&joined)
        .map(|m| m.as_str().to_string())
        .filter(|token| !stop.contains(token.as_str()))
        .collect()
}
