//! SMART analysis for key results
//!
//! Derives the five SMART flags from extracted features and field checks.
//! Relevance is the author's call, so the `relevant` flag is always true
//! and the score effectively spans 20 to 100.

use crate::config::CoachConfig;
use crate::features::TextFeatures;
use crate::types::{SmartAnalysis, ValidationSubject};
use chrono::{DateTime, Utc};

/// Points granted per satisfied SMART flag
const POINTS_PER_FLAG: u8 = 20;

pub(crate) const SPECIFIC_RECOMMENDATION: &str =
    "Rendez ce résultat clé plus spécifique avec un titre et une description détaillés";

pub(crate) const MEASURABLE_RECOMMENDATION: &str =
    "Ajoutez des métriques précises (valeur cible et unité) pour le rendre mesurable";

pub(crate) const TIME_BOUND_RECOMMENDATION: &str =
    "Définissez une date limite réaliste pour ce résultat clé";

pub(crate) const AMBITIOUS_TARGET_WARNING: &str =
    "Cet objectif semble très ambitieux, assurez-vous qu'il reste atteignable";

/// Compute SMART flags, score, and recommendations for a key result
pub(crate) fn analyze(
    subject: &ValidationSubject,
    features: &TextFeatures,
    config: &CoachConfig,
    now: DateTime<Utc>,
) -> SmartAnalysis {
    let target = subject.target_value_or_zero();

    let specific = features.title_length >= config.lengths.min_title
        && features.description_length >= config.lengths.min_description;
    let measurable = target > 0.0 && !subject.unit_text().trim().is_empty();
    let achievable = target <= config.unrealistic_target;
    let relevant = true;
    let time_bound = subject.deadline.map_or(false, |deadline| deadline >= now);

    let mut recommendations = Vec::new();
    if !specific {
        recommendations.push(SPECIFIC_RECOMMENDATION.to_string());
    }
    if !measurable {
        recommendations.push(MEASURABLE_RECOMMENDATION.to_string());
    }
    if !time_bound {
        recommendations.push(TIME_BOUND_RECOMMENDATION.to_string());
    }

    let satisfied = [specific, measurable, achievable, relevant, time_bound]
        .iter()
        .filter(|flag| **flag)
        .count() as u8;

    SmartAnalysis {
        specific,
        measurable,
        achievable,
        relevant,
        time_bound,
        score: satisfied * POINTS_PER_FLAG,
        recommendations,
    }
}
