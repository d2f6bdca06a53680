use tracing::debug;

use crate::domain::ingredient_analysis::{
    commentary::compose_comment,
    entities::{AnalysisResult, HealthRating},
    extraction::{extract_identity, extract_ingredients},
    matching::{match_additives, match_allergens},
    scoring::score,
};

/// Engine output together with the rating tier its comment was written for.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedAnalysis {
    pub result: AnalysisResult,
    pub rating: HealthRating,
}

/// Deterministic analysis of ingredients text for a set of user allergies.
///
/// Pure function of its inputs: the same text and allergies always produce
/// the same result.
pub fn analyze(ingredient_text: &str, user_allergies: &[String]) -> AnalysisResult {
    analyze_rated(ingredient_text, user_allergies).result
}

pub fn analyze_rated(ingredient_text: &str, user_allergies: &[String]) -> RatedAnalysis {
    let lower_text = ingredient_text.to_lowercase();

    let identity = extract_identity(ingredient_text);
    let ingredients = extract_ingredients(ingredient_text);
    let allergies = match_allergens(&lower_text, &ingredients, user_allergies);
    let additives = match_additives(&lower_text);

    let breakdown = score(&lower_text, ingredients.len(), &additives, allergies.len());
    let ai_comment = compose_comment(&breakdown, &lower_text, &allergies);

    debug!(
        ingredients = ingredients.len(),
        allergens = allergies.len(),
        additives = additives.len(),
        score = breakdown.value,
        "ingredients analyzed"
    );

    let result = AnalysisResult {
        product_name: identity.product_name,
        brand_name: identity.brand_name,
        score: breakdown.rounded(),
        ingredients,
        is_safe: allergies.is_empty(),
        allergies,
        additives,
        ai_comment,
    };

    RatedAnalysis {
        result,
        rating: breakdown.rating(),
    }
}
