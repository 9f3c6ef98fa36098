use lazy_static::lazy_static;
use regex_automata::meta::Regex;

use super::regions::get_r1;

static VOWELS: &str = "aeiouy";

lazy_static! {
    // Either non-vowel, vowel, non-vowel (other than w, x or Y) at the end
    // of the word, or a two letters word made of a vowel and a non-vowel.
    static ref SHORT_SYLLABLE: Regex = Regex::new(&format!(
        "(?:[^{}][{}][^{}wxY]|^[{}][^{}])$",
        VOWELS, VOWELS, VOWELS, VOWELS, VOWELS
    ))
    .unwrap();
}

#[inline]
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

pub fn contains_vowel(string: &str) -> bool {
    string.chars().any(is_vowel)
}

// A `y` starting the word or following a vowel acts as a consonant and is
// marked as `Y` until the end of the pipeline.
pub fn mark_consonant_y(word: &str) -> String {
    let mut marked = String::with_capacity(word.len());
    let mut previous_is_vowel = false;

    for (i, c) in word.chars().enumerate() {
        if c == 'y' && (i == 0 || previous_is_vowel) {
            marked.push('Y');
            previous_is_vowel = false;
        } else {
            marked.push(c);
            previous_is_vowel = is_vowel(c);
        }
    }

    marked
}

pub fn unmark_consonant_y(word: &str) -> String {
    word.replace('Y', "y")
}

pub fn ends_in_short_syllable(word: &str) -> bool {
    SHORT_SYLLABLE.is_match(word)
}

pub fn is_short_word(word: &str) -> bool {
    ends_in_short_syllable(word) && get_r1(word).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_vowel() {
        let tests = [('a', true), ('b', false), ('c', false), ('y', true), ('Y', false)];

        for (c, expected) in tests {
            assert_eq!(is_vowel(c), expected, "{}", c);
        }
    }

    #[test]
    fn test_mark_consonant_y() {
        let tests = [
            ("yes", "Yes"),
            ("stay", "staY"),
            ("dyed", "dyed"),
            ("ydyed", "Ydyed"),
            ("ayyyyy", "aYyYyY"),
            ("bodyguard", "bodyguard"),
            ("playing", "plaYing"),
            ("", ""),
        ];

        for (word, expected) in tests {
            assert_eq!(mark_consonant_y(word), expected);
        }
    }

    #[test]
    fn test_unmark_consonant_y() {
        assert_eq!(unmark_consonant_y("aYyYyY"), "ayyyyy");
        assert_eq!(unmark_consonant_y(&mark_consonant_y("yesterday")), "yesterday");
    }

    #[test]
    fn test_ends_in_short_syllable() {
        let tests = [
            ("rap", true),
            ("trap", true),
            ("entrap", true),
            ("ow", true),
            ("on", true),
            ("at", true),
            ("uproot", false),
            ("bestow", false),
            ("disturb", false),
            ("box", false),
            ("plaY", false),
            ("ceas", false),
            ("a", false),
            ("", false),
        ];

        for (word, expected) in tests {
            assert_eq!(ends_in_short_syllable(word), expected, "{}", word);
        }
    }

    #[test]
    fn test_is_short_word() {
        let tests = [
            ("bed", true),
            ("shed", true),
            ("shred", true),
            ("hop", true),
            ("bead", false),
            ("embed", false),
            ("beds", false),
        ];

        for (word, expected) in tests {
            assert_eq!(is_short_word(word), expected, "{}", word);
        }
    }
}
