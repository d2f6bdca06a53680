use crate::domain::ingredient_analysis::{
    entities::{ConcernLevel, HealthRating, MatchedAdditive},
    reference::{HEALTHY_TERMS, RED_FLAGS},
};

pub const MIN_SCORE: f64 = 5.0;
pub const MAX_SCORE: f64 = 100.0;

const BASE_SCORE: f64 = 50.0;
const HEALTHY_TERM_BONUS: f64 = 3.0;
const LONG_LIST_THRESHOLD: usize = 7;
const LONG_LIST_STEP: f64 = 1.5;
const LONG_LIST_MAX_PENALTY: f64 = 20.0;
const SHORT_LIST_THRESHOLD: usize = 5;
const SHORT_LIST_BONUS: f64 = 10.0;
const ORGANIC_BONUS: f64 = 5.0;
const WHOLE_GRAIN_BONUS: f64 = 5.0;
const NON_GMO_BONUS: f64 = 3.0;
const ALLERGEN_STEP: f64 = 7.0;
const ALLERGEN_MAX_PENALTY: f64 = 20.0;
const RED_FLAG_PENALTY: f64 = 15.0;

/// Health score along with the tallies the commentary refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Clamped to [`MIN_SCORE`, `MAX_SCORE`] but not rounded.
    pub value: f64,
    pub healthy_terms: usize,
    pub high_concern: usize,
    pub medium_concern: usize,
    pub low_concern: usize,
    pub red_flags: usize,
}

impl ScoreBreakdown {
    pub fn rounded(&self) -> u8 {
        self.value.round() as u8
    }

    /// Rating tier, taken from the unrounded value.
    pub fn rating(&self) -> HealthRating {
        HealthRating::from_score(self.value)
    }
}

fn additive_penalty(concern: ConcernLevel) -> f64 {
    match concern {
        ConcernLevel::High => 8.0,
        ConcernLevel::Medium => 4.0,
        ConcernLevel::Low => 1.0,
    }
}

pub fn ingredient_count_adjustment(count: usize) -> f64 {
    if count > LONG_LIST_THRESHOLD {
        -((count - LONG_LIST_THRESHOLD) as f64 * LONG_LIST_STEP).min(LONG_LIST_MAX_PENALTY)
    } else if count <= SHORT_LIST_THRESHOLD {
        SHORT_LIST_BONUS
    } else {
        0.0
    }
}

pub fn red_flags_present(lower_text: &str) -> usize {
    RED_FLAGS
        .iter()
        .filter(|flag| lower_text.contains(*flag))
        .count()
}

/// Scores a label. `lower_text` must already be lowercased.
pub fn score(
    lower_text: &str,
    ingredient_count: usize,
    additives: &[MatchedAdditive],
    allergen_count: usize,
) -> ScoreBreakdown {
    let mut value = BASE_SCORE;

    let healthy_terms = HEALTHY_TERMS
        .iter()
        .filter(|term| lower_text.contains(*term))
        .count();
    value += healthy_terms as f64 * HEALTHY_TERM_BONUS;

    let count = |concern: ConcernLevel| additives.iter().filter(|a| a.concern == concern).count();
    let (high_concern, medium_concern, low_concern) = (
        count(ConcernLevel::High),
        count(ConcernLevel::Medium),
        count(ConcernLevel::Low),
    );
    value -= additives
        .iter()
        .map(|additive| additive_penalty(additive.concern))
        .sum::<f64>();

    value += ingredient_count_adjustment(ingredient_count);

    if lower_text.contains("organic") && !lower_text.contains("non-organic") {
        value += ORGANIC_BONUS;
    }
    if lower_text.contains("whole grain") || lower_text.contains("whole wheat") {
        value += WHOLE_GRAIN_BONUS;
    }
    if lower_text.contains("non-gmo") || lower_text.contains("no gmo") {
        value += NON_GMO_BONUS;
    }

    if allergen_count > 0 {
        value -= (allergen_count as f64 * ALLERGEN_STEP).min(ALLERGEN_MAX_PENALTY);
    }

    let red_flags = red_flags_present(lower_text);
    value -= red_flags as f64 * RED_FLAG_PENALTY;

    ScoreBreakdown {
        value: value.clamp(MIN_SCORE, MAX_SCORE),
        healthy_terms,
        high_concern,
        medium_concern,
        low_concern,
        red_flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn additive(name: &str, concern: ConcernLevel) -> MatchedAdditive {
        MatchedAdditive {
            name: name.to_string(),
            concern,
        }
    }

    #[test]
    fn test_neutral_text_with_short_list() {
        let breakdown = score("water, sugar, salt", 3, &[], 0);
        assert_eq!(breakdown.value, 60.0);
        assert_eq!(breakdown.rounded(), 60);
    }

    #[test]
    fn test_ingredient_count_adjustment() {
        assert_eq!(ingredient_count_adjustment(0), 10.0);
        assert_eq!(ingredient_count_adjustment(5), 10.0);
        assert_eq!(ingredient_count_adjustment(6), 0.0);
        assert_eq!(ingredient_count_adjustment(7), 0.0);
        assert_eq!(ingredient_count_adjustment(9), -3.0);
        assert_eq!(ingredient_count_adjustment(40), -20.0);
    }

    #[test]
    fn test_additive_penalties() {
        let additives = [
            additive("red 40", ConcernLevel::High),
            additive("dextrose", ConcernLevel::Medium),
            additive("pectin", ConcernLevel::Low),
        ];
        let breakdown = score("", 6, &additives, 0);
        assert_eq!(breakdown.value, 50.0 - 8.0 - 4.0 - 1.0);
        assert_eq!(breakdown.high_concern, 1);
        assert_eq!(breakdown.medium_concern, 1);
        assert_eq!(breakdown.low_concern, 1);
    }

    #[test]
    fn test_healthy_terms_count_once_each() {
        let breakdown = score("kale, kale, kale, garlic", 6, &[], 0);
        assert_eq!(breakdown.healthy_terms, 2);
        assert_eq!(breakdown.value, 56.0);
    }

    #[test]
    fn test_label_claims() {
        // "organic" is also a healthy term worth 3
        assert_eq!(score("organic oats", 6, &[], 0).value, 58.0);
        assert_eq!(score("non-organic oats", 6, &[], 0).value, 53.0);
        assert_eq!(score("whole wheat", 6, &[], 0).value, 55.0);
        assert_eq!(score("no gmo", 6, &[], 0).value, 53.0);
    }

    #[test]
    fn test_allergen_penalty_is_capped() {
        assert_eq!(score("", 6, &[], 1).value, 43.0);
        assert_eq!(score("", 6, &[], 2).value, 36.0);
        assert_eq!(score("", 6, &[], 5).value, 30.0);
    }

    #[test]
    fn test_red_flag_counts_once_per_phrase() {
        let once = score("palm oil", 6, &[], 0).value;
        let repeated = score("trans fat, trans fat, trans fat", 6, &[], 0);
        assert_eq!(once - repeated.value, 15.0);
        assert_eq!(repeated.red_flags, 1);
    }

    #[test]
    fn test_partially_hydrogenated_also_hits_hydrogenated() {
        let breakdown = score("partially hydrogenated palm oil", 6, &[], 0);
        assert_eq!(breakdown.red_flags, 2);
        assert_eq!(breakdown.value, 20.0);
    }

    #[test]
    fn test_score_is_clamped() {
        let flags = "partially hydrogenated trans fat high fructose artificial color";
        assert_eq!(score(flags, 30, &[], 4).value, MIN_SCORE);

        let healthy = "whole grain organic natural vitamin mineral fiber protein quinoa chia flax \
                       lentil bean vegetable fruit nuts seeds kale garlic onion apple";
        assert_eq!(score(healthy, 3, &[], 0).value, MAX_SCORE);
    }

    #[test]
    fn test_rounding_happens_last() {
        let breakdown = score("", 8, &[], 0);
        assert_eq!(breakdown.value, 48.5);
        assert_eq!(breakdown.rounded(), 49);
    }

    #[test]
    fn test_rating_ignores_rounding() {
        // 50 - 1.5 (8 ingredients) - 4 - 8 - 7 (1 allergen) = 29.5
        let additives = [
            additive("dextrose", ConcernLevel::Medium),
            additive("red 40", ConcernLevel::High),
        ];
        let breakdown = score("", 8, &additives, 1);
        assert_eq!(breakdown.value, 29.5);
        assert_eq!(breakdown.rounded(), 30);
        assert_eq!(breakdown.rating(), HealthRating::Poor);
    }
}
