//! Validation enrichment
//!
//! [`AdviceEnricher`] wraps a [`GoalValidator`] and appends provider advice
//! to the deterministic suggestions. The provider is strictly best-effort:
//! error or timeout means the deterministic result ships unchanged, and the
//! rubric's confidence, validity, and warnings are never touched by advice.

use crate::provider::AdviceProvider;
use coach_core::{
    AIValidation, GoalValidator, KeyResultValidation, ValidationCategory, ValidationSubject,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Enrichment tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichConfig {
    /// How long the provider may take before the deterministic result
    /// ships without advice
    pub provider_timeout: Duration,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(4),
        }
    }
}

/// Validator wrapper that appends provider advice to suggestions
pub struct AdviceEnricher {
    validator: GoalValidator,
    provider: Option<Arc<dyn AdviceProvider>>,
    config: EnrichConfig,
}

impl AdviceEnricher {
    /// Create an enricher with no provider; validation passes through
    #[inline]
    #[must_use]
    pub fn new(validator: GoalValidator) -> Self {
        Self {
            validator,
            provider: None,
            config: EnrichConfig::default(),
        }
    }

    /// With an advice provider
    #[inline]
    #[must_use]
    pub fn with_provider(mut self, provider: impl AdviceProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// With enrichment tuning
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: EnrichConfig) -> Self {
        self.config = config;
        self
    }

    /// The wrapped validator
    #[inline]
    #[must_use]
    pub fn validator(&self) -> &GoalValidator {
        &self.validator
    }

    /// Validate a subject under the given category, then append advice
    pub async fn validate(
        &self,
        category: ValidationCategory,
        subject: &ValidationSubject,
        company_context: Option<&str>,
    ) -> AIValidation {
        match category {
            ValidationCategory::Ambition => {
                self.validate_ambition(subject, company_context).await
            }
            ValidationCategory::KeyResult => self
                .validate_key_result(subject, company_context)
                .await
                .into_validation(),
            ValidationCategory::Okr => self.validate_okr(subject, company_context).await,
            ValidationCategory::Action => self.validate_action(subject, company_context).await,
        }
    }

    /// Validate an ambition, then append advice
    pub async fn validate_ambition(
        &self,
        subject: &ValidationSubject,
        company_context: Option<&str>,
    ) -> AIValidation {
        let mut validation = self.validator.validate_ambition(subject);
        self.append_advice(&mut validation.suggestions, subject, company_context)
            .await;
        validation
    }

    /// Validate a key result, then append advice
    ///
    /// The SMART breakdown is computed before the provider runs and is never
    /// altered by it.
    pub async fn validate_key_result(
        &self,
        subject: &ValidationSubject,
        company_context: Option<&str>,
    ) -> KeyResultValidation {
        let mut result = self.validator.validate_key_result(subject);
        self.append_advice(&mut result.validation.suggestions, subject, company_context)
            .await;
        result
    }

    /// Validate an OKR, then append advice
    pub async fn validate_okr(
        &self,
        subject: &ValidationSubject,
        company_context: Option<&str>,
    ) -> AIValidation {
        let mut validation = self.validator.validate_okr(subject);
        self.append_advice(&mut validation.suggestions, subject, company_context)
            .await;
        validation
    }

    /// Validate an action, then append advice
    pub async fn validate_action(
        &self,
        subject: &ValidationSubject,
        company_context: Option<&str>,
    ) -> AIValidation {
        let mut validation = self.validator.validate_action(subject);
        self.append_advice(&mut validation.suggestions, subject, company_context)
            .await;
        validation
    }

    async fn append_advice(
        &self,
        suggestions: &mut Vec<String>,
        subject: &ValidationSubject,
        company_context: Option<&str>,
    ) {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return,
        };

        let advice = timeout(
            self.config.provider_timeout,
            provider.generate_advice(subject, company_context),
        )
        .await;

        match advice {
            Ok(Ok(lines)) => {
                for line in lines {
                    let line = line.trim();
                    if line.is_empty() || suggestions.iter().any(|s| s.as_str() == line) {
                        continue;
                    }
                    suggestions.push(line.to_string());
                }
            }
            Ok(Err(error)) => {
                warn!(%error, "advice provider failed; keeping deterministic suggestions");
            }
            Err(_) => {
                warn!(
                    timeout = ?self.config.provider_timeout,
                    "advice provider timed out; keeping deterministic suggestions"
                );
            }
        }
    }
}

impl std::fmt::Debug for AdviceEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdviceEnricher")
            .field("validator", &self.validator)
            .field("has_provider", &self.provider.is_some())
            .field("config", &self.config)
            .finish()
    }
}
