use std::cmp::Ordering;

// Longest first, then lexicographic so that ties never depend on the order
// in which the candidates were written.
fn by_decreasing_length(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// Returns the longest candidate being a suffix of the given word, or an
/// empty string if none matches.
pub fn find_longest_suffix<'a>(word: &str, candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .filter(|candidate| word.ends_with(candidate))
        .min_by(|a, b| by_decreasing_length(a, b))
        .unwrap_or("")
}

/// Suffixes associated with some data, kept sorted by decreasing length so
/// that the first match is always the longest one.
pub struct SuffixTable<T> {
    rules: Vec<(&'static str, T)>,
}

impl<T: Clone> SuffixTable<T> {
    pub fn new(rules: &[(&'static str, T)]) -> Self {
        let mut rules = rules.to_vec();
        rules.sort_by(|(a, _), (b, _)| by_decreasing_length(a, b));

        Self { rules }
    }
}

impl<T> SuffixTable<T> {
    pub fn longest_match(&self, word: &str) -> Option<(&'static str, &T)> {
        self.rules
            .iter()
            .find(|(suffix, _)| word.ends_with(suffix))
            .map(|(suffix, data)| (*suffix, data))
    }
}
