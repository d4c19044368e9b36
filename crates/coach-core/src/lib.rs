//! Coach Core - Deterministic goal validation
//!
//! The rule engine behind the coach:
//! - Extracts surface features from French goal text
//! - Scores ambitions, key results, OKRs, and actions against rubrics
//! - Produces confidence, suggestions, and warnings in one pass
//! - Narrates progress and serves canned suggestions per goal category
//!
//! Same subject, same configuration, same clock: same result. There is no
//! model call and no randomness anywhere in this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use coach_core::{GoalValidator, ValidationSubject};
//!
//! let validator = GoalValidator::new();
//! let subject = ValidationSubject::new()
//!     .with_title("Doubler le chiffre d'affaires de mon entreprise")
//!     .with_description("Passer de 500K€ à 1M€ de CA annuel");
//!
//! let validation = validator.validate_ambition(&subject);
//! println!("valid: {} ({}%)", validation.is_valid, validation.confidence);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod features;
pub mod progress;
pub mod sentiment;
pub mod types;
pub mod validator;

// Internal rule modules
mod rubric;
mod smart;

// Re-exports for convenience
pub use catalog::generate_suggestions;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    CoachConfig, LengthThresholds, ProgressTiers, DEFAULT_SMART_SCORE_THRESHOLD,
    DEFAULT_UNREALISTIC_TARGET, DEFAULT_VALIDITY_THRESHOLD,
};
pub use error::CategoryError;
pub use features::TextFeatures;
pub use progress::{progress_message, progress_message_with};
pub use sentiment::analyze_sentiment;
pub use types::{
    AIValidation, ChildWeight, GoalCategory, KeyResultValidation, Sentiment, SmartAnalysis,
    ValidationCategory, ValidationSubject,
};
pub use validator::GoalValidator;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Coach Core
    pub use crate::{
        analyze_sentiment, generate_suggestions, progress_message, AIValidation, CoachConfig,
        GoalCategory, GoalValidator, KeyResultValidation, Sentiment, SmartAnalysis,
        ValidationCategory, ValidationSubject,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn full_flow_over_one_subject() {
        let validator = GoalValidator::new();
        let subject = ValidationSubject::new()
            .with_title("Doubler le chiffre d'affaires de mon entreprise")
            .with_description("Passer de 500K€ à 1M€ de CA annuel en développant de nouveaux marchés");

        let validation = validator.validate(ValidationCategory::Ambition, &subject);
        assert!(validation.is_valid);
        assert_eq!(validation.confidence, 100);

        let tips = generate_suggestions(GoalCategory::Revenue, "chiffre d'affaires");
        assert!(!tips.is_empty());

        assert_eq!(analyze_sentiment("Très belle réussite"), Sentiment::Positive);
        assert!(progress_message(85.0).contains("Excellent"));
    }

    #[test]
    fn version_is_exposed() {
        assert!(!VERSION.is_empty());
    }
}
