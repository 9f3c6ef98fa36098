// Reference:
// https://snowballstem.org/texts/r1r2.html
use super::classifier::is_vowel;

// Words starting with those prefixes would be overstemmed by the generic
// computation, e.g. "generate" and "general".
static R1_PREFIXES: [&str; 3] = ["gener", "commun", "arsen"];

/// Returns the region following the first non-vowel that itself follows a
/// vowel, or the null region at the end of the word if there is none.
pub fn compute_region_tail(word: &str) -> &str {
    let mut seen_vowel = false;

    for (i, c) in word.char_indices() {
        if is_vowel(c) {
            seen_vowel = true;
        } else if seen_vowel {
            return &word[i + c.len_utf8()..];
        }
    }

    &word[word.len()..]
}

pub fn get_r1(word: &str) -> &str {
    for prefix in R1_PREFIXES {
        if let Some(r1) = word.strip_prefix(prefix) {
            return r1;
        }
    }

    compute_region_tail(word)
}

/// R2 is computed on R1 as if it was a word of its own, without the prefix
/// override.
pub fn get_r1_r2(word: &str) -> (&str, &str) {
    let r1 = get_r1(word);

    (r1, compute_region_tail(r1))
}
