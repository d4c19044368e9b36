//! Goal validation orchestrator
//!
//! [`GoalValidator`] wires feature extraction, the category rubrics, and
//! SMART analysis behind one entry point per category plus an enum-keyed
//! dispatch. It owns the configuration and the clock; everything below it
//! is a pure function of its inputs.

use crate::clock::{Clock, SystemClock};
use crate::config::CoachConfig;
use crate::features::TextFeatures;
use crate::progress;
use crate::rubric::{self, RubricCheck, RubricInput};
use crate::smart;
use crate::types::{AIValidation, KeyResultValidation, ValidationCategory, ValidationSubject};
use std::sync::Arc;
use tracing::debug;

/// Deterministic validator for goal artifacts
///
/// Cheap to clone; the clock is shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct GoalValidator {
    config: CoachConfig,
    clock: Arc<dyn Clock>,
}

impl GoalValidator {
    /// Create a validator with default configuration and the system clock
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CoachConfig::default())
    }

    /// Create a validator with explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: CoachConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// With a custom time source
    #[inline]
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    /// Validate a subject under the given category
    ///
    /// Key-result subjects are validated in full; only the SMART breakdown
    /// is dropped from the returned value.
    #[must_use]
    pub fn validate(
        &self,
        category: ValidationCategory,
        subject: &ValidationSubject,
    ) -> AIValidation {
        match category {
            ValidationCategory::Ambition => self.validate_ambition(subject),
            ValidationCategory::KeyResult => self.validate_key_result(subject).into_validation(),
            ValidationCategory::Okr => self.validate_okr(subject),
            ValidationCategory::Action => self.validate_action(subject),
        }
    }

    /// Validate an ambition (title, description, verb, quantifiable element)
    #[must_use]
    pub fn validate_ambition(&self, subject: &ValidationSubject) -> AIValidation {
        self.run_rubric(ValidationCategory::Ambition, &rubric::AMBITION_CHECKS, subject)
    }

    /// Validate an OKR (objective text, attached key results, weight sum)
    #[must_use]
    pub fn validate_okr(&self, subject: &ValidationSubject) -> AIValidation {
        self.run_rubric(ValidationCategory::Okr, &rubric::OKR_CHECKS, subject)
    }

    /// Validate an action (title, deadline presence and freshness)
    #[must_use]
    pub fn validate_action(&self, subject: &ValidationSubject) -> AIValidation {
        self.run_rubric(ValidationCategory::Action, &rubric::ACTION_CHECKS, subject)
    }

    /// Validate a key result against the SMART rubric
    ///
    /// Validity demands the specific, measurable, and time-bound flags plus
    /// a score at or above the configured threshold. An unrealistic target
    /// surfaces as a warning, never as a penalty.
    #[must_use]
    pub fn validate_key_result(&self, subject: &ValidationSubject) -> KeyResultValidation {
        let now = self.clock.now();
        let features = TextFeatures::extract(subject.title_text(), subject.description_text());
        let analysis = smart::analyze(subject, &features, &self.config, now);

        let mut warnings = Vec::new();
        if !analysis.achievable {
            warnings.push(smart::AMBITIOUS_TARGET_WARNING.to_string());
        }

        let is_valid = analysis.specific
            && analysis.measurable
            && analysis.time_bound
            && analysis.score >= self.config.smart_score_threshold;

        debug!(
            category = %ValidationCategory::KeyResult,
            score = analysis.score,
            valid = is_valid,
            "validation completed"
        );

        KeyResultValidation {
            validation: AIValidation {
                is_valid,
                confidence: analysis.score,
                suggestions: analysis.recommendations.clone(),
                warnings,
                category: ValidationCategory::KeyResult,
                validated_at: now,
            },
            smart_analysis: analysis,
        }
    }

    /// Encouragement message for a completion percentage, using the
    /// configured tiers
    #[inline]
    #[must_use]
    pub fn progress_message(&self, progress_percent: f64) -> &'static str {
        progress::progress_message_with(&self.config.progress, progress_percent)
    }

    fn run_rubric(
        &self,
        category: ValidationCategory,
        checks: &[RubricCheck],
        subject: &ValidationSubject,
    ) -> AIValidation {
        let now = self.clock.now();
        let features = TextFeatures::extract(subject.title_text(), subject.description_text());
        let input = RubricInput {
            subject,
            features: &features,
            config: &self.config,
            now,
        };
        let outcome = rubric::score(checks, &input);
        let is_valid = outcome.confidence >= self.config.validity_threshold;

        debug!(
            category = %category,
            confidence = outcome.confidence,
            valid = is_valid,
            suggestions = outcome.suggestions.len(),
            warnings = outcome.warnings.len(),
            "validation completed"
        );

        AIValidation {
            is_valid,
            confidence: outcome.confidence,
            suggestions: outcome.suggestions,
            warnings: outcome.warnings,
            category,
            validated_at: now,
        }
    }
}

impl Default for GoalValidator {
    fn default() -> Self {
        Self::new()
    }
}
