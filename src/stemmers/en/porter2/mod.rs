// Reference:
// https://snowballstem.org/algorithms/english/stemmer.html
//
// Input words are expected to be lowercase ASCII. Anything else will not
// panic but will yield unspecified stems.
use std::fmt;

use tracing::trace;

mod classifier;
mod exceptions;
mod regions;
pub mod steps;
mod suffixes;

pub use classifier::{
    ends_in_short_syllable, is_short_word, is_vowel, mark_consonant_y, unmark_consonant_y,
};
pub use exceptions::{exceptional_form, is_invariant_after_step1a};
pub use regions::{compute_region_tail, get_r1, get_r1_r2};
pub use suffixes::find_longest_suffix;

use steps::{step0, step1a, step1b, step1c, step2, step3, step4, step5};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Porter2Stage {
    Exception1,
    Step0,
    Step1a,
    Exception2,
    Step1b,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5,
}

impl Porter2Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exception1 => "exception1",
            Self::Step0 => "step0",
            Self::Step1a => "step1a",
            Self::Exception2 => "exception2",
            Self::Step1b => "step1b",
            Self::Step1c => "step1c",
            Self::Step2 => "step2",
            Self::Step3 => "step3",
            Self::Step4 => "step4",
            Self::Step5 => "step5",
        }
    }
}

impl fmt::Display for Porter2Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

type Step = fn(&str) -> String;

static EARLY_STEPS: [(Porter2Stage, Step); 2] =
    [(Porter2Stage::Step0, step0), (Porter2Stage::Step1a, step1a)];

static LATE_STEPS: [(Porter2Stage, Step); 6] = [
    (Porter2Stage::Step1b, step1b),
    (Porter2Stage::Step1c, step1c),
    (Porter2Stage::Step2, step2),
    (Porter2Stage::Step3, step3),
    (Porter2Stage::Step4, step4),
    (Porter2Stage::Step5, step5),
];

fn apply_steps<F>(steps: &[(Porter2Stage, Step)], mut word: String, callback: &mut F) -> String
where
    F: FnMut(Porter2Stage, &str),
{
    for (stage, step) in steps {
        let next = step(&word);

        if next != word {
            trace!(stage = %stage, from = %word, to = %next, "porter2 rewrite");
        }

        word = next;
        callback(*stage, &word);
    }

    word
}

fn run<F>(word: &str, mut callback: F) -> String
where
    F: FnMut(Porter2Stage, &str),
{
    if word.len() <= 2 {
        return word.to_string();
    }

    if let Some(stem) = exceptional_form(word) {
        trace!(word, stem, "porter2 exceptional form");
        callback(Porter2Stage::Exception1, stem);
        return stem.to_string();
    }

    let word = word.strip_prefix('\'').unwrap_or(word);
    let word = apply_steps(&EARLY_STEPS, mark_consonant_y(word), &mut callback);

    if is_invariant_after_step1a(&word) {
        trace!(word = %word, "porter2 invariant after step1a");
        callback(Porter2Stage::Exception2, &word);
        return unmark_consonant_y(&word);
    }

    let word = apply_steps(&LATE_STEPS, word, &mut callback);

    unmark_consonant_y(&word)
}

pub fn porter2_stemmer(word: &str) -> String {
    run(word, |_, _| ())
}

/// Runs the stemmer while recording the word obtained after each stage,
/// with consonant y unmarked. The last recorded word is the stem.
pub fn porter2_trace(word: &str) -> Vec<(Porter2Stage, String)> {
    let mut stages = Vec::new();

    run(word, |stage, current| {
        stages.push((stage, unmark_consonant_y(current)))
    });

    stages
}
