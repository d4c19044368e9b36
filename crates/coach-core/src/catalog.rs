//! Canned coaching suggestions per goal category
//!
//! Templates carry a `{keyword}` slot filled with the caller's topic. The
//! catalog is a total function over [`GoalCategory`]: every category owns a
//! non-empty template list, and a blank keyword falls back to a generic
//! subject instead of producing broken sentences.

use crate::types::GoalCategory;

const KEYWORD_SLOT: &str = "{keyword}";

const DEFAULT_KEYWORD: &str = "votre objectif";

/// Render the suggestion list for a category, interpolating `keyword`
///
/// The keyword is trimmed first; when nothing is left the generic subject
/// "votre objectif" is used instead.
#[must_use]
pub fn generate_suggestions(category: GoalCategory, keyword: &str) -> Vec<String> {
    let keyword = keyword.trim();
    let keyword = if keyword.is_empty() { DEFAULT_KEYWORD } else { keyword };

    templates(category)
        .iter()
        .map(|template| template.replace(KEYWORD_SLOT, keyword))
        .collect()
}

fn templates(category: GoalCategory) -> &'static [&'static str] {
    match category {
        GoalCategory::Revenue => &[
            "Fixez un objectif de chiffre d'affaires précis pour {keyword}",
            "Décomposez {keyword} en paliers trimestriels mesurables",
            "Identifiez les trois principales sources de revenus qui alimenteront {keyword}",
            "Associez un plan d'action commercial concret à {keyword}",
        ],
        GoalCategory::Growth => &[
            "Définissez un indicateur de croissance unique pour suivre {keyword}",
            "Fixez un rythme d'acquisition mensuel réaliste pour {keyword}",
            "Identifiez le canal qui contribuera le plus à {keyword}",
            "Mesurez la rétention autant que l'acquisition pour {keyword}",
        ],
        GoalCategory::Product => &[
            "Reliez {keyword} à un problème client clairement identifié",
            "Définissez un critère de succès mesurable pour {keyword}",
            "Planifiez des jalons de livraison intermédiaires pour {keyword}",
            "Prévoyez un retour utilisateur rapide sur {keyword}",
        ],
        GoalCategory::Team => &[
            "Précisez les compétences clés à recruter pour {keyword}",
            "Fixez un calendrier de recrutement réaliste pour {keyword}",
            "Définissez un objectif d'intégration mesurable pour {keyword}",
        ],
        GoalCategory::Market => &[
            "Délimitez précisément le marché visé par {keyword}",
            "Fixez une part de marché cible chiffrée pour {keyword}",
            "Analysez deux concurrents directs avant de lancer {keyword}",
        ],
        GoalCategory::Operational => &[
            "Identifiez le processus le plus coûteux à améliorer pour {keyword}",
            "Fixez un objectif de réduction chiffré pour {keyword}",
            "Mesurez le temps gagné grâce à {keyword}",
        ],
        GoalCategory::Personal => &[
            "Réservez un créneau hebdomadaire dédié à {keyword}",
            "Définissez une étape intermédiaire mesurable pour {keyword}",
            "Identifiez un mentor ou une ressource pour progresser sur {keyword}",
        ],
    }
}
