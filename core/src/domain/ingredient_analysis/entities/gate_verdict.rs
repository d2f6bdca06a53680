use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Breakdown of the admissibility heuristic for one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GateVerdict {
    #[schema(minimum = 0, maximum = 9)]
    pub score: u8,
    pub has_ingredients_word: bool,
    pub has_commas: bool,
    pub has_common_ingredient: bool,
    pub has_e_number: bool,
    pub accepted: bool,
}
