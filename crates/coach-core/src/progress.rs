//! Progress narration
//!
//! Maps a completion percentage to one of three French encouragement
//! messages. Tiers close over their lower bound, so progress exactly at a
//! boundary lands in the higher tier.

use crate::config::ProgressTiers;

const MSG_EXCELLENT: &str = "Excellent travail ! Vous êtes sur le point d'atteindre votre objectif";

const MSG_ON_TRACK: &str = "Vous êtes sur la bonne voie, continuez vos efforts";

const MSG_SLOWDOWN: &str =
    "Un ralentissement est normal, recentrez-vous sur les actions à fort impact";

/// Encouragement message for a completion percentage, using default tiers
///
/// `NaN` reads as no progress at all and lands in the lowest tier. Values
/// outside 0-100 are not clamped; anything at or above the top boundary is
/// celebrated the same way.
#[must_use]
pub fn progress_message(progress_percent: f64) -> &'static str {
    progress_message_with(&ProgressTiers::default(), progress_percent)
}

/// Encouragement message for a completion percentage, using custom tiers
#[must_use]
pub fn progress_message_with(tiers: &ProgressTiers, progress_percent: f64) -> &'static str {
    let progress = if progress_percent.is_nan() { 0.0 } else { progress_percent };

    if progress >= tiers.high {
        MSG_EXCELLENT
    } else if progress >= tiers.low {
        MSG_ON_TRACK
    } else {
        MSG_SLOWDOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_close_over_their_lower_bound() {
        assert_eq!(progress_message(80.0), MSG_EXCELLENT);
        assert_eq!(progress_message(79.9), MSG_ON_TRACK);
        assert_eq!(progress_message(40.0), MSG_ON_TRACK);
        assert_eq!(progress_message(39.9), MSG_SLOWDOWN);
        assert_eq!(progress_message(0.0), MSG_SLOWDOWN);
    }

    #[test]
    fn out_of_range_progress_is_not_clamped() {
        assert_eq!(progress_message(150.0), MSG_EXCELLENT);
        assert_eq!(progress_message(-10.0), MSG_SLOWDOWN);
    }

    #[test]
    fn nan_progress_reads_as_zero() {
        assert_eq!(progress_message(f64::NAN), MSG_SLOWDOWN);
    }

    #[test]
    fn custom_tiers_shift_the_boundaries() {
        let tiers = ProgressTiers { high: 90.0, low: 50.0 };
        assert_eq!(progress_message_with(&tiers, 85.0), MSG_ON_TRACK);
        assert_eq!(progress_message_with(&tiers, 90.0), MSG_EXCELLENT);
        assert_eq!(progress_message_with(&tiers, 45.0), MSG_SLOWDOWN);
    }

    #[test]
    fn messages_carry_their_tier_tone() {
        assert!(progress_message(95.0).contains("Excellent"));
        assert!(progress_message(60.0).contains("bonne voie"));
        assert!(progress_message(10.0).contains("ralentissement"));
    }
}
