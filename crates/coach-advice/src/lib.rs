//! Coach Advice - best-effort enrichment over the deterministic validators
//!
//! Validation stays deterministic and local in `coach-core`. This crate adds
//! the optional second stage: an [`AdviceProvider`] contributes free-text
//! advice that is appended to the rubric suggestions when it arrives in
//! time, and silently dropped when it does not.
//!
//! # Example
//!
//! ```rust,ignore
//! use coach_advice::{AdviceEnricher, AdviceProvider};
//! use coach_core::{GoalValidator, ValidationSubject};
//!
//! # async fn example(provider: impl AdviceProvider + 'static) {
//! let enricher = AdviceEnricher::new(GoalValidator::new()).with_provider(provider);
//!
//! let subject = ValidationSubject::new().with_title("Vendre");
//! let validation = enricher.validate_ambition(&subject, Some("PME, 40 salariés")).await;
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod enrich;
pub mod provider;

pub use enrich::{AdviceEnricher, EnrichConfig};
pub use provider::AdviceProvider;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
