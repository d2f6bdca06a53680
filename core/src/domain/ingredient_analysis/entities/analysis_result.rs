use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How strongly an allergen category tends to provoke a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// How problematic an additive is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConcernLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchedAllergen {
    /// The term found in the label text.
    pub name: String,
    /// Key of the category the term belongs to.
    pub associated_with: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchedAdditive {
    pub name: String,
    pub concern: ConcernLevel,
}

/// Output of one engine run. Same contract a model-backed analysis must honour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub product_name: String,
    pub brand_name: String,
    #[schema(minimum = 5, maximum = 100)]
    pub score: u8,
    pub ingredients: Vec<String>,
    pub allergies: Vec<MatchedAllergen>,
    pub additives: Vec<MatchedAdditive>,
    pub is_safe: bool,
    pub ai_comment: String,
}
