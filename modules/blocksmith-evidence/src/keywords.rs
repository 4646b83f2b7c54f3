//! Keyword extraction for query building.
//!
//! Longest words carry the most topical signal in a debate resolution, so
//! surviving words are ordered by descending length before truncation.

/// Words that never make useful search terms: determiners, auxiliaries,
/// modals, and debate boilerplate.
const FILLER_WORDS: &[&str] = &[
    "the", "a", "an", "that", "this", "these", "those", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "should", "would", "could", "will",
    "shall", "may", "might", "must", "can", "resolved", "debate", "argument", "therefore", "thus",
    "hence", "because", "since",
];

/// Extract up to `max_keywords` keywords from free text.
///
/// Lower-cases, strips everything that is not a word character or
/// whitespace, drops filler words and words of three characters or fewer,
/// then keeps the longest survivors. The sort is stable: equal-length
/// words keep their original scan order.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let mut keywords: Vec<String> = cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 3 && !FILLER_WORDS.contains(word))
        .map(str::to_string)
        .collect();

    // Vec::sort_by is stable, so ties keep scan order.
    keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    keywords.truncate(max_keywords);
    keywords
}
