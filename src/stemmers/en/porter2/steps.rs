// Every step takes a word whose consonant y have been marked as `Y` and
// returns it untouched when none of its rules apply.
use lazy_static::lazy_static;
use regex_automata::meta::Regex;

use super::classifier::{contains_vowel, ends_in_short_syllable, is_short_word, is_vowel};
use super::regions::{get_r1, get_r1_r2};
use super::suffixes::{find_longest_suffix, SuffixTable};

static STEP0: [&str; 3] = ["'", "'s", "'s'"];
static STEP1A: [&str; 6] = ["sses", "ied", "ies", "s", "us", "ss"];
static STEP1B: [&str; 6] = ["eed", "eedly", "ed", "edly", "ing", "ingly"];
static DOUBLES: [&str; 9] = ["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];
static LI_ENDINGS: &str = "cdeghkmnrt";

#[derive(Clone, Copy)]
enum Condition {
    Always,
    PrecededBy(&'static str),
    InR2,
}

impl Condition {
    fn holds(&self, stem: &str, suffix: &str, r2: &str) -> bool {
        match self {
            Self::Always => true,
            Self::PrecededBy(letters) => stem
                .chars()
                .next_back()
                .is_some_and(|c| letters.contains(c)),
            Self::InR2 => r2.ends_with(suffix),
        }
    }
}

type Rule = (&'static str, Condition);

lazy_static! {
    static ref STEP1B_LENGTHENING: Regex = Regex::new(r"(?:at|bl|iz)$").unwrap();

    static ref STEP2: SuffixTable<Rule> = SuffixTable::new(&[
        ("tional", ("tion", Condition::Always)),
        ("enci", ("ence", Condition::Always)),
        ("anci", ("ance", Condition::Always)),
        ("abli", ("able", Condition::Always)),
        ("entli", ("ent", Condition::Always)),
        ("izer", ("ize", Condition::Always)),
        ("ization", ("ize", Condition::Always)),
        ("ational", ("ate", Condition::Always)),
        ("ation", ("ate", Condition::Always)),
        ("ator", ("ate", Condition::Always)),
        ("alism", ("al", Condition::Always)),
        ("aliti", ("al", Condition::Always)),
        ("alli", ("al", Condition::Always)),
        ("fulness", ("ful", Condition::Always)),
        ("ousli", ("ous", Condition::Always)),
        ("ousness", ("ous", Condition::Always)),
        ("iveness", ("ive", Condition::Always)),
        ("iviti", ("ive", Condition::Always)),
        ("biliti", ("ble", Condition::Always)),
        ("bli", ("ble", Condition::Always)),
        ("fulli", ("ful", Condition::Always)),
        ("lessli", ("less", Condition::Always)),
        ("ogi", ("og", Condition::PrecededBy("l"))),
        ("li", ("", Condition::PrecededBy(LI_ENDINGS))),
    ]);

    static ref STEP3: SuffixTable<Rule> = SuffixTable::new(&[
        ("tional", ("tion", Condition::Always)),
        ("ational", ("ate", Condition::Always)),
        ("alize", ("al", Condition::Always)),
        ("icate", ("ic", Condition::Always)),
        ("iciti", ("ic", Condition::Always)),
        ("ical", ("ic", Condition::Always)),
        ("ful", ("", Condition::Always)),
        ("ness", ("", Condition::Always)),
        ("ative", ("", Condition::InR2)),
    ]);

    static ref STEP4: SuffixTable<Rule> = SuffixTable::new(&[
        ("al", ("", Condition::Always)),
        ("ance", ("", Condition::Always)),
        ("ence", ("", Condition::Always)),
        ("er", ("", Condition::Always)),
        ("ic", ("", Condition::Always)),
        ("able", ("", Condition::Always)),
        ("ible", ("", Condition::Always)),
        ("ant", ("", Condition::Always)),
        ("ement", ("", Condition::Always)),
        ("ment", ("", Condition::Always)),
        ("ent", ("", Condition::Always)),
        ("ism", ("", Condition::Always)),
        ("ate", ("", Condition::Always)),
        ("iti", ("", Condition::Always)),
        ("ous", ("", Condition::Always)),
        ("ive", ("", Condition::Always)),
        ("ize", ("", Condition::Always)),
        ("ion", ("", Condition::PrecededBy("st"))),
    ]);
}

fn replace_suffix(stem: &str, replacement: &str) -> String {
    let mut word = String::with_capacity(stem.len() + replacement.len());
    word.push_str(stem);
    word.push_str(replacement);
    word
}

// Only the longest matching suffix is considered: when it does not lie in
// the given region, or its condition fails, the word is left as is.
fn apply_rules(rules: &SuffixTable<Rule>, word: &str, region: &str, r2: &str) -> String {
    if let Some((suffix, (replacement, condition))) = rules.longest_match(word) {
        let stem = &word[..word.len() - suffix.len()];

        if region.ends_with(suffix) && condition.holds(stem, suffix, r2) {
            return replace_suffix(stem, replacement);
        }
    }

    word.to_string()
}

pub fn step0(word: &str) -> String {
    let suffix = find_longest_suffix(word, &STEP0);

    word[..word.len() - suffix.len()].to_string()
}

pub fn step1a(word: &str) -> String {
    let suffix = find_longest_suffix(word, &STEP1A);
    let stem = &word[..word.len() - suffix.len()];

    match suffix {
        "sses" => replace_suffix(stem, "ss"),
        "ied" | "ies" => replace_suffix(stem, if stem.len() > 1 { "i" } else { "ie" }),
        "s" => {
            // The vowel cannot be the letter right before the s: "gas", "this"
            let mut chars = stem.chars();
            chars.next_back();

            if chars.any(is_vowel) {
                stem.to_string()
            } else {
                word.to_string()
            }
        }
        _ => word.to_string(),
    }
}

pub fn step1b(word: &str) -> String {
    let suffix = find_longest_suffix(word, &STEP1B);
    let stem = &word[..word.len() - suffix.len()];

    match suffix {
        "eed" | "eedly" => {
            if get_r1(word).ends_with(suffix) {
                replace_suffix(stem, "ee")
            } else {
                word.to_string()
            }
        }
        "ed" | "edly" | "ing" | "ingly" => {
            if !contains_vowel(stem) {
                return word.to_string();
            }

            let mut stem = stem.to_string();

            if STEP1B_LENGTHENING.is_match(&stem) {
                stem.push('e');
            } else if DOUBLES.iter().any(|double| stem.ends_with(double)) {
                stem.pop();
            } else if is_short_word(&stem) {
                stem.push('e');
            }

            stem
        }
        _ => word.to_string(),
    }
}

pub fn step1c(word: &str) -> String {
    let mut chars = word.chars();

    match (chars.next_back(), chars.next_back()) {
        (Some('y' | 'Y'), Some(c)) if !is_vowel(c) && word.len() > 2 => {
            replace_suffix(&word[..word.len() - 1], "i")
        }
        _ => word.to_string(),
    }
}

pub fn step2(word: &str) -> String {
    let (r1, r2) = get_r1_r2(word);

    apply_rules(&STEP2, word, r1, r2)
}

pub fn step3(word: &str) -> String {
    let (r1, r2) = get_r1_r2(word);

    apply_rules(&STEP3, word, r1, r2)
}

pub fn step4(word: &str) -> String {
    let (_, r2) = get_r1_r2(word);

    apply_rules(&STEP4, word, r2, r2)
}

pub fn step5(word: &str) -> String {
    let (r1, r2) = get_r1_r2(word);

    if let Some(stem) = word.strip_suffix('e') {
        if r2.ends_with('e') || (r1.ends_with('e') && !ends_in_short_syllable(stem)) {
            return stem.to_string();
        }
    } else if let Some(stem) = word.strip_suffix('l') {
        if r2.ends_with('l') && stem.ends_with('l') {
            return stem.to_string();
        }
    }

    word.to_string()
}
