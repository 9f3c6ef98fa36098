use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

lazy_static! {
    // Looked up on the raw word, before anything else.
    static ref EXCEPTIONAL_FORMS: HashMap<&'static str, &'static str> = [
        ("skis", "ski"),
        ("skies", "sky"),
        ("dying", "die"),
        ("lying", "lie"),
        ("tying", "tie"),
        ("idly", "idl"),
        ("gently", "gentl"),
        ("ugly", "ugli"),
        ("early", "earli"),
        ("only", "onli"),
        ("singly", "singl"),
        ("sky", "sky"),
        ("news", "news"),
        ("howe", "howe"),
        ("atlas", "atlas"),
        ("cosmos", "cosmos"),
        ("bias", "bias"),
        ("andes", "andes"),
    ]
    .into_iter()
    .collect();

    // Looked up after step 1a, those must not go through step 1b.
    static ref INVARIANTS_AFTER_STEP1A: HashSet<&'static str> = [
        "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
    ]
    .into_iter()
    .collect();
}

pub fn exceptional_form(word: &str) -> Option<&'static str> {
    EXCEPTIONAL_FORMS.get(word).copied()
}

pub fn is_invariant_after_step1a(word: &str) -> bool {
    INVARIANTS_AFTER_STEP1A.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exceptional_form() {
        assert_eq!(exceptional_form("skis"), Some("ski"));
        assert_eq!(exceptional_form("atlas"), Some("atlas"));
        assert_eq!(exceptional_form("atlases"), None);
        assert_eq!(exceptional_form("ski"), None);
    }

    #[test]
    fn test_is_invariant_after_step1a() {
        assert!(is_invariant_after_step1a("earring"));
        assert!(is_invariant_after_step1a("proceed"));
        assert!(!is_invariant_after_step1a("earrings"));
        assert!(!is_invariant_after_step1a("proceeding"));
    }
}
