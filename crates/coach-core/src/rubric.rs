//! Declarative validation rubrics
//!
//! Each category owns a static table of checks. A check pairs a predicate
//! with a penalty and a message, so adding a rule means adding a row rather
//! than a code path. Soft checks subtract confidence and emit a suggestion;
//! risk checks emit a warning and leave confidence alone.

use crate::config::CoachConfig;
use crate::features::TextFeatures;
use crate::types::ValidationSubject;
use chrono::{DateTime, Utc};

/// Confidence granted before any check runs
pub(crate) const FULL_CONFIDENCE: u8 = 100;

/// Largest key-result count an objective stays readable with
const MAX_KEY_RESULTS: usize = 5;

/// Tolerance applied when comparing the child weight sum to 100
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// What a failed check contributes to the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckSeverity {
    /// Subtracts the penalty and emits a suggestion
    Soft,
    /// Emits a warning only
    Risk,
}

/// Everything a check predicate may look at
#[derive(Debug, Clone, Copy)]
pub(crate) struct RubricInput<'a> {
    pub(crate) subject: &'a ValidationSubject,
    pub(crate) features: &'a TextFeatures,
    pub(crate) config: &'a CoachConfig,
    pub(crate) now: DateTime<Utc>,
}

/// One row of a category rubric
pub(crate) struct RubricCheck {
    /// Stable identifier, used in logs
    pub(crate) name: &'static str,
    /// Confidence points removed when a soft check fails
    pub(crate) penalty: u8,
    pub(crate) severity: CheckSeverity,
    pub(crate) failed: fn(&RubricInput<'_>) -> bool,
    pub(crate) message: fn(&RubricInput<'_>) -> String,
}

/// Aggregated result of running one rubric
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RubricOutcome {
    pub(crate) confidence: u8,
    pub(crate) suggestions: Vec<String>,
    pub(crate) warnings: Vec<String>,
}

pub(crate) static AMBITION_CHECKS: [RubricCheck; 4] = [
    RubricCheck {
        name: "ambition_title_length",
        penalty: 20,
        severity: CheckSeverity::Soft,
        failed: |input| input.features.title_length < input.config.lengths.min_title,
        message: |input| {
            format!(
                "Le titre de l'ambition devrait être plus descriptif (au moins {} caractères)",
                input.config.lengths.min_title
            )
        },
    },
    RubricCheck {
        name: "ambition_description_length",
        penalty: 15,
        severity: CheckSeverity::Soft,
        failed: |input| input.features.description_length < input.config.lengths.min_description,
        message: |_| "Ajoutez une description plus détaillée pour clarifier votre ambition".to_string(),
    },
    RubricCheck {
        name: "ambition_action_verb",
        penalty: 15,
        severity: CheckSeverity::Soft,
        failed: |input| !input.features.has_action_verb,
        message: |_| {
            "Utilisez un verbe d'action pour exprimer votre ambition (doubler, atteindre, lancer...)"
                .to_string()
        },
    },
    RubricCheck {
        name: "ambition_quantifiable",
        penalty: 10,
        severity: CheckSeverity::Soft,
        failed: |input| !input.features.has_quantifiable_element,
        message: |_| {
            "Ajoutez un élément quantifiable pour mesurer le succès (montant, pourcentage, quantité)"
                .to_string()
        },
    },
];

pub(crate) static ACTION_CHECKS: [RubricCheck; 3] = [
    RubricCheck {
        name: "action_title_length",
        penalty: 20,
        severity: CheckSeverity::Soft,
        failed: |input| input.features.title_length < input.config.lengths.min_title,
        message: |_| "Le titre de l'action devrait être plus descriptif".to_string(),
    },
    RubricCheck {
        name: "action_deadline_missing",
        penalty: 20,
        severity: CheckSeverity::Soft,
        failed: |input| input.subject.deadline.is_none(),
        message: |_| "Définissez une date limite pour cette action".to_string(),
    },
    RubricCheck {
        name: "action_deadline_past",
        penalty: 0,
        severity: CheckSeverity::Risk,
        failed: |input| matches!(input.subject.deadline, Some(deadline) if deadline < input.now),
        message: |_| "La date limite est dans le passé".to_string(),
    },
];

pub(crate) static OKR_CHECKS: [RubricCheck; 4] = [
    RubricCheck {
        name: "okr_objective_length",
        penalty: 35,
        severity: CheckSeverity::Soft,
        failed: |input| input.features.title_length < input.config.lengths.min_title,
        message: |_| "L'objectif devrait être plus détaillé".to_string(),
    },
    RubricCheck {
        name: "okr_key_results_missing",
        penalty: 40,
        severity: CheckSeverity::Soft,
        failed: |input| input.subject.child_items.is_empty(),
        message: |_| "Ajoutez au moins un résultat clé à cet objectif".to_string(),
    },
    RubricCheck {
        name: "okr_key_results_crowded",
        penalty: 0,
        severity: CheckSeverity::Risk,
        failed: |input| input.subject.child_items.len() > MAX_KEY_RESULTS,
        message: |_| "Un OKR est plus efficace avec 3-5 résultats clés".to_string(),
    },
    RubricCheck {
        name: "okr_weight_sum",
        penalty: 35,
        severity: CheckSeverity::Soft,
        failed: |input| {
            !input.subject.child_items.is_empty()
                && (input.subject.child_weight_sum() - 100.0).abs() > WEIGHT_SUM_TOLERANCE
        },
        message: |input| {
            format!(
                "La somme des poids des résultats clés devrait être égale à 100 (actuellement {})",
                input.subject.child_weight_sum()
            )
        },
    },
];

/// Run every check in a rubric and fold the failures into one outcome
///
/// Confidence starts at [`FULL_CONFIDENCE`] and saturates at zero, and a
/// message is recorded at most once, so the outcome always satisfies the
/// output bounds no matter what the table contains.
pub(crate) fn score(checks: &[RubricCheck], input: &RubricInput<'_>) -> RubricOutcome {
    let mut outcome = RubricOutcome {
        confidence: FULL_CONFIDENCE,
        suggestions: Vec::new(),
        warnings: Vec::new(),
    };

    for check in checks {
        if !(check.failed)(input) {
            continue;
        }
        tracing::trace!(check = check.name, severity = ?check.severity, "rubric check failed");
        let message = (check.message)(input);
        match check.severity {
            CheckSeverity::Soft => {
                outcome.confidence = outcome.confidence.saturating_sub(check.penalty);
                push_unique(&mut outcome.suggestions, message);
            }
            CheckSeverity::Risk => push_unique(&mut outcome.warnings, message),
        }
    }

    outcome
}

fn push_unique(messages: &mut Vec<String>, message: String) {
    if !messages.iter().any(|existing| existing == &message) {
        messages.push(message);
    }
}
