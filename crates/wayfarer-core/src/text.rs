// crates/wayfarer-core/src/text.rs

//! Text folding and the loose matching rules used by the search engine.

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `São Paulo` -> `Sao Paulo`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::fold_key;
///
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// assert_eq!(fold_key("TOKYO"), "tokyo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Trim and fold a raw user query.
pub fn normalize_query(s: &str) -> String {
    fold_key(s.trim())
}

/// Plural suffixes and their singular replacement, tried in order.
///
/// Only the first rule whose suffix matches is applied.
pub const PLURAL_RULES: [(&str, &str); 3] = [("ies", "y"), ("es", ""), ("s", "")];

/// Strip one simple English plural suffix from a word.
///
/// This is a scope-limited heuristic, not a stemmer: `cities` -> `city`,
/// `beaches` -> `beach`, `temples` -> `templ`. The last one still matches
/// `temple` because word comparison is by containment.
pub fn strip_plural(word: &str) -> String {
    for (suffix, replacement) in PLURAL_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    word.to_string()
}

/// Bidirectional containment: either string contains the other.
#[inline]
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Free-text match between a normalized query and an arbitrary text.
///
/// `query` must already be normalized with [`normalize_query`]; `text` is
/// folded here. An empty text never matches.
pub fn matches_text(query: &str, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let text = fold_key(text);
    contains_either(&text, query) || matches_with_variations(query, &text)
}

/// Words shorter than this never take part in the word-level fallback.
pub const MIN_VARIATION_WORD_LEN: usize = 3;

/// Word-level fallback that tolerates singular/plural differences.
///
/// Both inputs are split on whitespace, each word is singularized, and the
/// match succeeds if any query word and any text word contain one another.
/// Singularized words shorter than [`MIN_VARIATION_WORD_LEN`] are ignored,
/// otherwise articles like `a` would be found inside almost any query.
pub fn matches_with_variations(query: &str, text: &str) -> bool {
    let text_words: Vec<String> = words(text).collect();
    words(query).any(|q| text_words.iter().any(|t| contains_either(t, &q)))
}

fn words(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split_whitespace()
        .map(strip_plural)
        .filter(|w| w.chars().count() >= MIN_VARIATION_WORD_LEN)
}
