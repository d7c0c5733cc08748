//! String similarity scoring.

use rapidfuzz::distance::indel;

/// Similarity of two strings on a 0–100 scale, ignoring case.
///
/// This is the Indel-normalized Levenshtein ratio: insertions and deletions
/// cost one, a substitution costs two, and the distance is divided by the
/// combined length, then scaled and rounded half-to-even. Identical strings
/// score 100. An empty string on either side scores 0.
pub fn similarity(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let ratio = indel::normalized_similarity(a.chars(), b.chars());
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}
