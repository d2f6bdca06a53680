use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ingredient_analysis::{
    entities::GateVerdict, reference::COMMON_FOOD_TERMS,
};

/// Minimum confidence for text to be treated as an ingredients label.
pub const ACCEPT_THRESHOLD: u8 = 3;

/// Shortest trimmed OCR output worth looking at.
pub const MIN_TEXT_LEN: usize = 10;

const INGREDIENTS_WORD_WEIGHT: u8 = 2;
const COMMAS_WEIGHT: u8 = 2;
const COMMON_INGREDIENT_WEIGHT: u8 = 3;
const E_NUMBER_WEIGHT: u8 = 2;

static E_NUMBER_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)e-?[0-9]{3}").expect("static regex is valid"));

/// Scores how much `text` looks like an ingredients label.
pub fn evaluate(text: &str) -> GateVerdict {
    let lower = text.to_lowercase();

    let has_ingredients_word = lower.contains("ingredients");
    let has_commas = text.matches(',').count() >= 2;
    let has_common_ingredient = COMMON_FOOD_TERMS.iter().any(|term| lower.contains(term));
    let has_e_number = E_NUMBER_HINT.is_match(&lower);

    let score = [
        (has_ingredients_word, INGREDIENTS_WORD_WEIGHT),
        (has_commas, COMMAS_WEIGHT),
        (has_common_ingredient, COMMON_INGREDIENT_WEIGHT),
        (has_e_number, E_NUMBER_WEIGHT),
    ]
    .into_iter()
    .filter(|(signal, _)| *signal)
    .map(|(_, weight)| weight)
    .sum();

    GateVerdict {
        score,
        has_ingredients_word,
        has_commas,
        has_common_ingredient,
        has_e_number,
        accepted: score >= ACCEPT_THRESHOLD,
    }
}

pub fn is_ingredients_list(text: &str) -> bool {
    evaluate(text).accepted
}

/// Whether OCR output is long enough to be worth gating at all.
pub fn has_enough_text(text: &str) -> bool {
    text.trim().chars().count() >= MIN_TEXT_LEN
}
