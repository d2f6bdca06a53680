use crate::domain::ingredient_analysis::{
    entities::{HealthRating, MatchedAllergen, Severity},
    scoring::ScoreBreakdown,
};

const POOR: &str = "This product contains several concerning ingredients that may contribute to health issues with regular consumption.";
const MODERATE: &str = "This product has some questionable ingredients, but is acceptable for occasional consumption.";
const GOOD: &str = "This product has a fairly good nutritional profile with minimal concerning ingredients.";
const EXCELLENT: &str =
    "This product appears to have a high-quality ingredient list with minimal processing.";

const RED_FLAG_WARNING: &str =
    " Contains ingredients strongly associated with negative health effects.";
const ORGANIC_NOTE: &str = " Organically sourced ingredients provide additional health benefits.";
const ALLERGEN_NOTE: &str = " Contains allergens that may trigger your allergic reactions.";

/// Writes the short explanation shown next to the score.
///
/// The tier follows the clamped score before rounding.
pub fn compose_comment(
    breakdown: &ScoreBreakdown,
    lower_text: &str,
    allergens: &[MatchedAllergen],
) -> String {
    let mut comment = String::new();

    match breakdown.rating() {
        HealthRating::Poor => {
            comment.push_str(POOR);
            if breakdown.high_concern > 0 {
                comment.push_str(&format!(
                    " Found {} high-concern additives.",
                    breakdown.high_concern
                ));
            }
            if breakdown.red_flags > 0 {
                comment.push_str(RED_FLAG_WARNING);
            }
        }
        HealthRating::Moderate => {
            comment.push_str(MODERATE);
            if breakdown.medium_concern > 0 {
                comment.push_str(&format!(
                    " Contains {} additives of moderate concern.",
                    breakdown.medium_concern
                ));
            }
        }
        HealthRating::Good => {
            comment.push_str(GOOD);
            if breakdown.healthy_terms > 0 {
                comment.push_str(&format!(
                    " Contains {} beneficial ingredients.",
                    breakdown.healthy_terms
                ));
            }
        }
        HealthRating::Excellent => {
            comment.push_str(EXCELLENT);
            if lower_text.contains("organic") {
                comment.push_str(ORGANIC_NOTE);
            }
        }
    }

    if !allergens.is_empty() {
        let high_severity = allergens
            .iter()
            .filter(|allergen| allergen.severity == Severity::High)
            .count();

        if high_severity > 0 {
            comment.push_str(&format!(
                " Contains {high_severity} high-severity allergens that may cause serious reactions."
            ));
        } else {
            comment.push_str(ALLERGEN_NOTE);
        }
    }

    comment
}
