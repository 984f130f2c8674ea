//! Character-level string similarity on a 0-100 scale.
//!
//! The score is rapidfuzz's normalized indel similarity, `100 * 2 * lcs / (len_a + len_b)`
//! over chars, where `lcs` is the length of the longest common subsequence. It is
//! symmetric, equals 100 only for identical strings, and two empty strings count as
//! identical.

use rapidfuzz::fuzz;

/// Similarity between two strings in `[0.0, 100.0]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Index and score of the best-scoring candidate; the earliest candidate wins ties.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in candidates.into_iter().enumerate() {
        let score = ratio(query, candidate);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}
