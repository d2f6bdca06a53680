use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MAX_ALLERGIES: u64 = 32;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(
        min = 1,
        max = 20000,
        message = "text must be between 1 and 20000 characters"
    ))]
    pub text: String,

    #[serde(default)]
    #[validate(length(
        max = MAX_ALLERGIES,
        message = "at most 32 allergies can be checked at once"
    ))]
    pub allergies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckTextRequest {
    #[validate(length(max = 20000, message = "text must be at most 20000 characters"))]
    pub text: String,
}
