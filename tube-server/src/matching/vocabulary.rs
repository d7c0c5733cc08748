//! Best-match selection against a closed vocabulary.

use super::score::similarity;

/// A vocabulary entry selected for some input, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// The canonical vocabulary entry.
    pub name: &'a str,
    /// Similarity between the input and `name`, 0–100.
    pub score: u8,
}

/// Find the vocabulary entry most similar to `input`.
///
/// Entries are scored in vocabulary order and the best is replaced only by a
/// strictly higher score, so on ties the earliest entry wins. Returns `None`
/// when the vocabulary is empty or the best score is below `threshold`.
pub fn find_best<'a, S: AsRef<str>>(
    input: &str,
    vocabulary: &'a [S],
    threshold: u8,
) -> Option<Match<'a>> {
    let mut best: Option<Match<'a>> = None;

    for entry in vocabulary {
        let name = entry.as_ref();
        let score = similarity(input, name);
        if best.is_none_or(|b| score > b.score) {
            best = Some(Match { name, score });
        }
    }

    best.filter(|m| m.score >= threshold)
}
