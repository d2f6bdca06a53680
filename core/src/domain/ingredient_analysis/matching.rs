//! Term matching shared by the scoring engine and ingredient highlighting.
//!
//! Matching is plain substring search over lowercased text. There are no
//! word-boundary checks, so "egg" also hits "eggplant".

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::domain::ingredient_analysis::{
    entities::{
        AllergyRisk, AnalysisResult, ConcernLevel, IngredientAnnotation, MatchedAdditive,
        MatchedAllergen, Severity,
    },
    reference::{ADDITIVES, ALLERGEN_CATEGORIES, AllergenCategory},
};

static E_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[Ee][-\s]?[0-9]{3}[a-z]?\b").expect("static regex is valid"));

/// A category is selected when a user label and the category key (or one of
/// its aliases) contain one another, ignoring case.
pub fn is_category_selected(category: &AllergenCategory, user_allergies: &[String]) -> bool {
    user_allergies.iter().any(|allergy| {
        let allergy = allergy.to_lowercase();
        if allergy.is_empty() {
            return false;
        }

        std::iter::once(category.key)
            .chain(category.aliases.iter().copied())
            .any(|label| label.contains(allergy.as_str()) || allergy.contains(label))
    })
}

pub fn selected_categories(user_allergies: &[String]) -> Vec<&'static AllergenCategory> {
    ALLERGEN_CATEGORIES
        .iter()
        .filter(|category| is_category_selected(category, user_allergies))
        .collect()
}

/// Finds allergen terms of the selected categories in the label.
///
/// `lower_text` must already be lowercased. Each term is reported once even
/// when it belongs to several selected categories; the first category wins.
pub fn match_allergens(
    lower_text: &str,
    ingredients: &[String],
    user_allergies: &[String],
) -> Vec<MatchedAllergen> {
    let lower_ingredients: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();
    let mut seen = HashSet::new();
    let mut matched = Vec::new();

    for category in selected_categories(user_allergies) {
        for term in category.terms {
            let present = lower_text.contains(term)
                || lower_ingredients.iter().any(|ingredient| ingredient.contains(term));

            if present && seen.insert(*term) {
                matched.push(MatchedAllergen {
                    name: term.to_string(),
                    associated_with: category.key.to_string(),
                    severity: category.severity,
                });
            }
        }
    }

    matched
}

/// Named additives from the high and medium lists, in table order.
pub fn match_named_additives(lower_text: &str) -> Vec<MatchedAdditive> {
    [ConcernLevel::High, ConcernLevel::Medium]
        .into_iter()
        .flat_map(|concern| {
            ADDITIVES
                .names(concern)
                .iter()
                .filter(|name| lower_text.contains(*name))
                .map(move |name| MatchedAdditive {
                    name: name.to_string(),
                    concern,
                })
        })
        .collect()
}

/// E-number codes such as "e330" or "e-471a", each reported once as medium
/// concern since codes carry no severity of their own.
pub fn match_e_numbers(lower_text: &str) -> Vec<MatchedAdditive> {
    let mut seen = HashSet::new();

    E_NUMBER
        .find_iter(lower_text)
        .map(|m| m.as_str())
        .filter(|code| seen.insert(*code))
        .map(|code| MatchedAdditive {
            name: code.to_string(),
            concern: ConcernLevel::Medium,
        })
        .collect()
}

/// Both additive passes concatenated. They are not deduplicated against each other.
pub fn match_additives(lower_text: &str) -> Vec<MatchedAdditive> {
    let mut additives = match_named_additives(lower_text);
    additives.extend(match_e_numbers(lower_text));
    additives
}

/// Flags a single ingredient against already matched allergens and additives.
pub fn annotate_ingredient(
    ingredient: &str,
    allergens: &[MatchedAllergen],
    additives: &[MatchedAdditive],
) -> IngredientAnnotation {
    let lower = ingredient.to_lowercase();

    let is_allergen = allergens
        .iter()
        .any(|allergen| lower.contains(&allergen.name.to_lowercase()));

    let additive_concern = additives
        .iter()
        .find(|additive| lower.contains(&additive.name.to_lowercase()))
        .map(|additive| additive.concern);

    IngredientAnnotation {
        name: ingredient.to_string(),
        is_allergen,
        is_additive: additive_concern.is_some(),
        additive_concern,
    }
}

pub fn annotate_ingredients(result: &AnalysisResult) -> Vec<IngredientAnnotation> {
    result
        .ingredients
        .iter()
        .map(|ingredient| annotate_ingredient(ingredient, &result.allergies, &result.additives))
        .collect()
}

pub fn allergy_risk(allergens: &[MatchedAllergen]) -> AllergyRisk {
    let has = |severity: Severity| allergens.iter().any(|a| a.severity == severity);

    if has(Severity::High) {
        AllergyRisk::High
    } else if has(Severity::Medium) {
        AllergyRisk::Moderate
    } else if !allergens.is_empty() {
        AllergyRisk::Low
    } else {
        AllergyRisk::None
    }
}
