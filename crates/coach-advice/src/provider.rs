//! Advice provider seam
//!
//! The deterministic engine never talks to the network. When richer advice
//! is wanted, the host hands the enricher an [`AdviceProvider`]; anything
//! that can produce French advice lines fits behind this trait.

use async_trait::async_trait;
use coach_core::ValidationSubject;

/// External source of free-text coaching advice
///
/// Implementations typically wrap a remote model API. Returning an error is
/// a normal outcome (offline mode, missing credentials, exhausted quota);
/// callers keep the deterministic result and move on.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Produce advice lines for `subject`
    ///
    /// `company_context` carries an optional free-text company profile used
    /// to personalize the advice.
    ///
    /// # Errors
    ///
    /// Any failure to reach or parse the backing service. Errors are logged
    /// and swallowed by the enricher, never surfaced to the end user.
    async fn generate_advice(
        &self,
        subject: &ValidationSubject,
        company_context: Option<&str>,
    ) -> anyhow::Result<Vec<String>>;
}
