use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    ingredient_analysis::entities::{AnalysisResult, ConcernLevel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanSource {
    Image,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthRating {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl HealthRating {
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            HealthRating::Poor
        } else if score < 60.0 {
            HealthRating::Moderate
        } else if score < 80.0 {
            HealthRating::Good
        } else {
            HealthRating::Excellent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AllergyRisk {
    High,
    Moderate,
    Low,
    None,
}

/// Display flags for a single extracted ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAnnotation {
    pub name: String,
    pub is_allergen: bool,
    pub is_additive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additive_concern: Option<ConcernLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: ScanSource,
    pub extracted_text: String,
    pub result: AnalysisResult,
    pub annotations: Vec<IngredientAnnotation>,
    pub rating: HealthRating,
    pub allergy_risk: AllergyRisk,
}

impl ScanReport {
    pub fn new(
        source: ScanSource,
        extracted_text: String,
        result: AnalysisResult,
        annotations: Vec<IngredientAnnotation>,
        rating: HealthRating,
        allergy_risk: AllergyRisk,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            created_at: now,
            source,
            extracted_text,
            result,
            annotations,
            rating,
            allergy_risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(HealthRating::from_score(5.0), HealthRating::Poor);
        assert_eq!(HealthRating::from_score(29.5), HealthRating::Poor);
        assert_eq!(HealthRating::from_score(30.0), HealthRating::Moderate);
        assert_eq!(HealthRating::from_score(59.0), HealthRating::Moderate);
        assert_eq!(HealthRating::from_score(60.0), HealthRating::Good);
        assert_eq!(HealthRating::from_score(79.9), HealthRating::Good);
        assert_eq!(HealthRating::from_score(80.0), HealthRating::Excellent);
        assert_eq!(HealthRating::from_score(100.0), HealthRating::Excellent);
    }
}
