//! Static-list matching: case-insensitive whole-word prefix search.

/// Filter `candidates` by `term`.
///
/// A candidate matches when the term occurs at the start of the string or
/// immediately after a space, compared case-insensitively. Matching is done
/// over a sorted copy, so results come back in alphabetical order and the
/// caller's slice is never reordered. An empty term matches nothing.
pub fn find_matches(term: &str, candidates: &[String]) -> Vec<String> {
    if term.is_empty() {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    let mut sorted = candidates.to_vec();
    sorted.sort();

    sorted
        .into_iter()
        .filter(|candidate| matches_word_prefix(&candidate.to_lowercase(), &needle))
        .collect()
}

/// True when `needle` starts `haystack` or starts a word within it.
fn matches_word_prefix(haystack: &str, needle: &str) -> bool {
    if haystack.starts_with(needle) {
        return true;
    }
    haystack
        .match_indices(' ')
        .any(|(i, sep)| haystack[i + sep.len()..].starts_with(needle))
}
