use labelwise_core::domain::ingredient_analysis::{
    entities::Severity,
    reference::{ALLERGEN_CATEGORIES, ALLERGY_VOCABULARY},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenCategoryView {
    pub key: String,
    pub aliases: Vec<String>,
    pub terms: Vec<String>,
    pub severity: Severity,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergensResponse {
    pub data: Vec<AllergenCategoryView>,
    /// Labels offered to users when picking their allergies
    pub vocabulary: Vec<String>,
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[utoipa::path(
    get,
    path = "/allergens",
    tag = "ingredient-analysis",
    summary = "List allergen categories",
    responses(
        (status = 200, body = AllergensResponse)
    ),
)]
pub async fn get_allergens() -> Response<AllergensResponse> {
    let data = ALLERGEN_CATEGORIES
        .iter()
        .map(|category| AllergenCategoryView {
            key: category.key.to_string(),
            aliases: to_strings(category.aliases),
            terms: to_strings(category.terms),
            severity: category.severity,
        })
        .collect();

    Response::OK(AllergensResponse {
        data,
        vocabulary: to_strings(ALLERGY_VOCABULARY),
    })
}
