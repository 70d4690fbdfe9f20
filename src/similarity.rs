//! Text similarity for fuzzy label matching.
//!
//! Implements the classic Ratcliff/Obershelp "matching blocks" ratio
//! (the algorithm behind Python's `difflib.SequenceMatcher.ratio()`):
//! recursively find the longest matching block between two sequences,
//! then score `2.0 * M / T` where `M` is the total number of matched
//! characters and `T` the combined length of both inputs.
//!
//! Note this is not plain edit distance. The matching-blocks ratio is
//! what the reference evaluation outputs were produced with, so the
//! block-finding tie-break (largest block wins, earliest position in the
//! first string breaks ties) must be preserved exactly.

use std::collections::HashMap;

/// Compute the similarity ratio between two strings.
///
/// Returns a value in [0.0, 1.0] where 1.0 means identical. Case
/// sensitive; callers wanting case-insensitive matching should use
/// [`similarity_match`] or lowercase both sides first.
///
/// Two empty strings are considered identical (ratio 1.0).
///
/// # Examples
///
/// ```
/// use bpmn_eval::similarity::ratio;
///
/// assert!((ratio("shipped", "shipped") - 1.0).abs() < 1e-9);
/// assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
/// assert!((ratio("abc", "xyz")).abs() < 1e-9);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * total_matches(&a, &b) as f64 / total as f64
}

/// Check whether two labels are similar enough to count as a match.
///
/// Both sides are lowercased before comparison, then the ratio is
/// compared against `threshold` (inclusive). Pure function: no state,
/// no side effects.
///
/// # Examples
///
/// ```
/// use bpmn_eval::similarity::similarity_match;
///
/// assert!(similarity_match("Shipped", "shipped", 1.0));
/// assert!(similarity_match("order received", "Order is received", 0.7));
/// assert!(!similarity_match("unrelated item", "Shipped", 0.7));
/// ```
#[must_use]
pub fn similarity_match(a: &str, b: &str, threshold: f64) -> bool {
    ratio(&a.to_lowercase(), &b.to_lowercase()) >= threshold
}

/// Total number of matched characters across all matching blocks.
///
/// Mirrors `difflib`'s `get_matching_blocks` accounting: find the
/// longest matching block, then recurse (via an explicit queue) on the
/// regions to its left and right. No junk heuristics; labels here are
/// far below the length where difflib's autojunk would change results.
fn total_matches(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b2j.entry(ch).or_default().push(j);
    }

    let mut queue = vec![(0usize, a.len(), 0usize, b.len())];
    let mut matched = 0;
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            queue.push((alo, i, blo, j));
            queue.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Find the longest matching block in `a[alo..ahi]` x `b[blo..bhi]`.
///
/// Returns `(i, j, size)` such that `a[i..i+size] == b[j..j+size]`.
/// Ties are broken exactly as difflib does: only a strictly larger
/// block replaces the current best, so the earliest block in `a` wins.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // j2len[j] = length of the longest match ending at a[i], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut new_j2len = HashMap::new();
        if let Some(indices) = b2j.get(&a[i]) {
            for &j in indices {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_j2len.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = new_j2len;
    }

    (best_i, best_j, best_size)
}
