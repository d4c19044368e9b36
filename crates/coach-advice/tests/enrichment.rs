//! Enrichment behavior tests
//!
//! Providers here are hand-rolled doubles: canned, failing, recording, and
//! slow. The slow one runs under tokio's paused clock so the timeout path
//! is exercised without real waiting.

use async_trait::async_trait;
use coach_advice::{AdviceEnricher, AdviceProvider, EnrichConfig};
use coach_core::{ValidationCategory, ValidationSubject};
use coach_test_utils::{
    complete_key_result, rich_ambition, setup_test_validator, unbalanced_okr, vague_ambition,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Debug)]
struct CannedProvider {
    lines: Vec<String>,
}

#[async_trait]
impl AdviceProvider for CannedProvider {
    async fn generate_advice(
        &self,
        _subject: &ValidationSubject,
        _company_context: Option<&str>,
    ) -> anyhow::Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

#[derive(Debug)]
struct FailingProvider;

#[async_trait]
impl AdviceProvider for FailingProvider {
    async fn generate_advice(
        &self,
        _subject: &ValidationSubject,
        _company_context: Option<&str>,
    ) -> anyhow::Result<Vec<String>> {
        anyhow::bail!("service indisponible")
    }
}

#[derive(Debug)]
struct SlowProvider;

#[async_trait]
impl AdviceProvider for SlowProvider {
    async fn generate_advice(
        &self,
        _subject: &ValidationSubject,
        _company_context: Option<&str>,
    ) -> anyhow::Result<Vec<String>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(vec!["Trop tard".to_string()])
    }
}

#[derive(Debug, Clone, Default)]
struct RecordingProvider {
    contexts: Arc<Mutex<Vec<Option<String>>>>,
}

#[async_trait]
impl AdviceProvider for RecordingProvider {
    async fn generate_advice(
        &self,
        _subject: &ValidationSubject,
        company_context: Option<&str>,
    ) -> anyhow::Result<Vec<String>> {
        self.contexts
            .lock()
            .unwrap()
            .push(company_context.map(str::to_string));
        Ok(vec!["Conseil personnalisé".to_string()])
    }
}

#[tokio::test]
async fn advice_lands_after_deterministic_suggestions() {
    init_tracing();
    let validator = setup_test_validator();
    let plain = validator.validate_ambition(&vague_ambition());

    let enricher = AdviceEnricher::new(validator).with_provider(CannedProvider {
        lines: vec![
            "Conseil externe A".to_string(),
            "Conseil externe B".to_string(),
        ],
    });
    let enriched = enricher.validate_ambition(&vague_ambition(), None).await;

    let mut expected = plain.suggestions.clone();
    expected.push("Conseil externe A".to_string());
    expected.push("Conseil externe B".to_string());
    assert_eq!(enriched.suggestions, expected);

    // Advice never moves the verdict.
    assert_eq!(enriched.is_valid, plain.is_valid);
    assert_eq!(enriched.confidence, plain.confidence);
    assert_eq!(enriched.warnings, plain.warnings);
}

#[tokio::test]
async fn advice_also_reaches_subjects_the_rubric_is_happy_with() {
    let validator = setup_test_validator();
    let plain = validator.validate_ambition(&rich_ambition());
    assert!(plain.suggestions.is_empty());

    let enricher = AdviceEnricher::new(validator).with_provider(CannedProvider {
        lines: vec!["Pensez à impliquer votre équipe dans cet objectif".to_string()],
    });
    let enriched = enricher.validate_ambition(&rich_ambition(), None).await;

    assert_eq!(
        enriched.suggestions,
        vec!["Pensez à impliquer votre équipe dans cet objectif".to_string()]
    );
    assert!(enriched.is_valid);
}

#[tokio::test]
async fn duplicate_and_blank_advice_is_skipped() {
    let validator = setup_test_validator();
    let plain = validator.validate_ambition(&vague_ambition());
    let echoed = plain.suggestions[0].clone();

    let enricher = AdviceEnricher::new(validator).with_provider(CannedProvider {
        lines: vec![
            echoed,
            String::new(),
            "   ".to_string(),
            "Nouveau conseil".to_string(),
        ],
    });
    let enriched = enricher.validate_ambition(&vague_ambition(), None).await;

    let mut expected = plain.suggestions.clone();
    expected.push("Nouveau conseil".to_string());
    assert_eq!(enriched.suggestions, expected);
}

#[tokio::test]
async fn provider_failure_degrades_to_the_deterministic_result() {
    init_tracing();
    let validator = setup_test_validator();
    let plain = validator.validate_ambition(&vague_ambition());

    let enricher = AdviceEnricher::new(validator).with_provider(FailingProvider);
    let enriched = enricher.validate_ambition(&vague_ambition(), None).await;

    assert_eq!(enriched, plain);
}

#[tokio::test(start_paused = true)]
async fn provider_timeout_degrades_to_the_deterministic_result() {
    let validator = setup_test_validator();
    let plain = validator.validate_ambition(&vague_ambition());

    let enricher = AdviceEnricher::new(validator)
        .with_provider(SlowProvider)
        .with_config(EnrichConfig {
            provider_timeout: Duration::from_millis(50),
        });
    let enriched = enricher.validate_ambition(&vague_ambition(), None).await;

    assert_eq!(enriched, plain);
}

#[tokio::test]
async fn company_context_reaches_the_provider() {
    let recorder = RecordingProvider::default();
    let enricher = AdviceEnricher::new(setup_test_validator()).with_provider(recorder.clone());

    enricher
        .validate_okr(&unbalanced_okr(), Some("PME industrielle de 40 salariés"))
        .await;
    enricher.validate_okr(&unbalanced_okr(), None).await;

    let contexts = recorder.contexts.lock().unwrap();
    assert_eq!(
        *contexts,
        vec![Some("PME industrielle de 40 salariés".to_string()), None]
    );
}

#[tokio::test]
async fn key_result_enrichment_preserves_the_smart_breakdown() {
    let validator = setup_test_validator();
    let plain = validator.validate_key_result(&complete_key_result());

    let enricher = AdviceEnricher::new(validator).with_provider(CannedProvider {
        lines: vec!["Pensez à suivre la marge en parallèle".to_string()],
    });
    let enriched = enricher.validate_key_result(&complete_key_result(), None).await;

    assert_eq!(enriched.smart_analysis, plain.smart_analysis);
    assert_eq!(enriched.validation.is_valid, plain.validation.is_valid);
    assert!(enriched
        .validation
        .suggestions
        .contains(&"Pensez à suivre la marge en parallèle".to_string()));
}

#[tokio::test]
async fn dispatch_appends_advice_for_every_category() {
    let line = "Conseil spécifique du fournisseur".to_string();
    let subject = vague_ambition();

    for category in ValidationCategory::ALL {
        let enricher = AdviceEnricher::new(setup_test_validator()).with_provider(CannedProvider {
            lines: vec![line.clone()],
        });
        let validation = enricher.validate(category, &subject, None).await;
        assert_eq!(
            validation.suggestions.last(),
            Some(&line),
            "advice missing for {category}"
        );
    }
}
