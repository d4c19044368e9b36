//! Lexicon-based sentiment classification
//!
//! Surface-level by design: the classifier counts marker words and compares
//! the tallies. It never guesses tone from structure or negation.

use crate::features;
use crate::types::Sentiment;

/// Classify the overall tone of a free-text note
///
/// Ties, including texts with no markers at all, come back
/// [`Sentiment::Neutral`].
#[must_use]
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let (positive, negative) = features::sentiment_hits(text);
    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_note() {
        assert_eq!(
            analyze_sentiment("Très belle croissance ce trimestre, une vraie réussite"),
            Sentiment::Positive
        );
    }

    #[test]
    fn negative_note() {
        assert_eq!(
            analyze_sentiment("Gros problème de retard sur le projet"),
            Sentiment::Negative
        );
    }

    #[test]
    fn balanced_or_empty_notes_stay_neutral() {
        assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
        assert_eq!(analyze_sentiment("Réunion prévue mardi prochain"), Sentiment::Neutral);
        // One marker on each side.
        assert_eq!(
            analyze_sentiment("Une réussite malgré un obstacle"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn classification_ignores_case_and_accents() {
        assert_eq!(analyze_sentiment("CROISSANCE EXCELLENTE"), Sentiment::Positive);
        assert_eq!(analyze_sentiment("echec complet"), Sentiment::Negative);
    }
}
