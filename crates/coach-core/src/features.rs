//! Surface feature extraction from goal text
//!
//! Everything downstream (rubrics, SMART flags, sentiment) consumes the
//! features computed here instead of re-scanning raw text. Matching is
//! blind to case and French accents: text is lowercased and folded through
//! a small closed accent map before any lookup.

use once_cell::sync::Lazy;
use regex::Regex;

/// Action verbs that signal an actionable goal, pre-folded
///
/// Entries are matched as substrings of folded text, so a stem such as
/// `developp` also hits participles ("développant") and derived nouns.
const ACTION_VERBS: &[&str] = &[
    "augmenter",
    "doubler",
    "tripler",
    "lancer",
    "developp",
    "acquerir",
    "conquerir",
    "reduire",
    "diminuer",
    "atteindre",
    "creer",
    "ameliorer",
    "optimis",
    "automatis",
    "construire",
    "deployer",
    "etendre",
    "recruter",
    "signer",
    "vendre",
    "fidelis",
    "generer",
];

/// Positive sentiment markers, pre-folded
const POSITIVE_WORDS: &[&str] = &[
    "reussi",
    "croissance",
    "ameliorer",
    "amelioration",
    "succes",
    "progres",
    "atteindre",
    "gagner",
    "opportunite",
    "motivation",
    "confiance",
    "excellent",
    "solide",
    "efficace",
];

/// Negative sentiment markers, pre-folded
const NEGATIVE_WORDS: &[&str] = &[
    "echec",
    "echou",
    "probleme",
    "difficile",
    "difficulte",
    "risque",
    "baisse",
    "perdre",
    "perte",
    "retard",
    "obstacle",
    "crainte",
    "impossible",
    "stagnation",
];

/// Digits, currency or percent symbols, and French quantity words
static QUANTIFIABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d|%|€|\$|£|\bmillions?\b|\bmilliers?\b|\bmoitie\b|\bdoubler\b|\btripler\b|\bquadrupler\b")
        .expect("quantifiable pattern is valid")
});

/// Surface features of one title/description pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFeatures {
    /// Title length in characters, after trimming
    pub title_length: usize,
    /// Description length in characters, after trimming
    pub description_length: usize,
    /// Whether the combined text contains an action verb
    pub has_action_verb: bool,
    /// Whether the combined text contains a number, symbol, or quantity word
    pub has_quantifiable_element: bool,
    /// Positive marker occurrences in the combined text
    pub positive_hits: usize,
    /// Negative marker occurrences in the combined text
    pub negative_hits: usize,
}

impl TextFeatures {
    /// Extract features from a title and description
    ///
    /// Empty input is fine: absent text yields zero lengths, false flags,
    /// and zero marker counts.
    #[must_use]
    pub fn extract(title: &str, description: &str) -> Self {
        let combined = fold(&format!("{} {}", title, description));
        let (positive_hits, negative_hits) = hits_in_folded(&combined);

        Self {
            title_length: title.trim().chars().count(),
            description_length: description.trim().chars().count(),
            has_action_verb: ACTION_VERBS.iter().any(|verb| combined.contains(verb)),
            has_quantifiable_element: QUANTIFIABLE.is_match(&combined),
            positive_hits,
            negative_hits,
        }
    }
}

/// Lowercase text and strip French accents through a closed char map
fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}

/// Count positive and negative marker occurrences in raw text
pub(crate) fn sentiment_hits(text: &str) -> (usize, usize) {
    hits_in_folded(&fold(text))
}

fn hits_in_folded(folded: &str) -> (usize, usize) {
    let positive = POSITIVE_WORDS
        .iter()
        .map(|word| folded.matches(word).count())
        .sum();
    let negative = NEGATIVE_WORDS
        .iter()
        .map(|word| folded.matches(word).count())
        .sum();
    (positive, negative)
}
