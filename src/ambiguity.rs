//! Heuristic ambiguity detection over raw requirement notes.
//!
//! Purely lexical: three fixed phrase lists matched as substrings of the
//! lowercased content, plus two word-boundary regex checks for actor roles
//! and success criteria. Deterministic and side-effect-free; not a learned
//! model and not meant to become one.

use crate::model::RawNotes;
use regex::Regex;
use std::sync::LazyLock;

/// Qualitative phrases that need a concrete, measurable definition.
const AMBIGUOUS_PHRASES: [&str; 18] = [
    "user-friendly",
    "easy to use",
    "fast",
    "secure",
    "reliable",
    "good performance",
    "nice to have",
    "should be",
    "might need",
    "probably",
    "maybe",
    "some",
    "few",
    "many",
    "several",
    "as needed",
    "when possible",
    "if required",
];

/// Quantifiers that need actual numbers.
const VAGUE_QUANTIFIERS: [&str; 11] = [
    "a lot", "some", "many", "few", "several", "most", "often", "rarely", "sometimes", "usually",
    "generally",
];

/// Markers of an enumeration the author never finished.
const INCOMPLETE_MARKERS: [&str; 5] = ["etc", "and so on", "among others", "for example", "such as"];

static ACTOR_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(user|customer|admin|manager|employee|client)\b").expect("valid regex")
});

static COMPLETION_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(success|complete|done|finish|achieve)\b").expect("valid regex"));

/// Scan notes for ambiguous language and return human-readable warnings.
///
/// Warning order is stable: ambiguous phrases, vague quantifiers,
/// incomplete-enumeration markers, then the conditional role and
/// success-criteria warnings. Each matched phrase produces at most one
/// warning per list.
pub fn detect(notes: &RawNotes) -> Vec<String> {
    let content = notes.content.to_lowercase();
    let mut warnings = Vec::new();

    for phrase in AMBIGUOUS_PHRASES {
        if content.contains(phrase) {
            warnings.push(format!(
                "Ambiguous term detected: '{}' - needs specific definition",
                phrase
            ));
        }
    }

    for quantifier in VAGUE_QUANTIFIERS {
        if content.contains(quantifier) {
            warnings.push(format!(
                "Vague quantifier detected: '{}' - needs specific numbers",
                quantifier
            ));
        }
    }

    for marker in INCOMPLETE_MARKERS {
        if content.contains(marker) {
            warnings.push(format!(
                "Incomplete specification detected: '{}' - needs complete list",
                marker
            ));
        }
    }

    if !ACTOR_ROLE.is_match(&content) {
        warnings.push(
            "No clear user roles identified - specify who will use the system".to_string(),
        );
    }

    if !COMPLETION_TERM.is_match(&content) {
        warnings.push(
            "No clear success criteria defined - specify what constitutes completion".to_string(),
        );
    }

    warnings
}
