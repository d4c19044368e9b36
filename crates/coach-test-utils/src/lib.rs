//! Testing utilities for the coach workspace
//!
//! Shared subject fixtures and a pinned clock.

#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use coach_core::{FixedClock, GoalValidator, ValidationSubject};

/// The instant every deterministic test runs at
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
}

/// A clock pinned to [`fixed_now`]
pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_now())
}

/// `days` after (or before, when negative) [`fixed_now`]
pub fn in_days(days: i64) -> DateTime<Utc> {
    fixed_now() + Duration::days(days)
}

/// Validator with default configuration and the pinned clock
pub fn setup_test_validator() -> GoalValidator {
    GoalValidator::new().with_clock(fixed_clock())
}

/// Ambition that passes every check at full confidence
pub fn rich_ambition() -> ValidationSubject {
    ValidationSubject::new()
        .with_title("Doubler le chiffre d'affaires de mon entreprise")
        .with_description(
            "Passer de 500K€ à 1M€ de CA annuel en développant de nouveaux marchés \
             et en optimisant nos processus de vente",
        )
}

/// Ambition with a too-short title and nothing quantifiable
pub fn vague_ambition() -> ValidationSubject {
    ValidationSubject::new()
        .with_title("Vendre")
        .with_description("Vendre plus de produits cette année pour augmenter les revenus")
}

/// Key result satisfying all five SMART flags
pub fn complete_key_result() -> ValidationSubject {
    ValidationSubject::new()
        .with_title("Atteindre 1 million d'euros de chiffre d'affaires")
        .with_description(
            "Augmenter le CA de 500K€ à 1M€ en développant 3 nouveaux canaux de vente",
        )
        .with_target_value(1_000_000.0)
        .with_unit("€")
        .with_deadline(in_days(365))
}

/// OKR whose child weights sum to 60 instead of 100
pub fn unbalanced_okr() -> ValidationSubject {
    ValidationSubject::new()
        .with_title("Devenir leader régional du marché")
        .with_child_weights([30.0, 30.0])
}
