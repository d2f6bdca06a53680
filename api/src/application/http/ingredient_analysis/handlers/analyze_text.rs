use axum::extract::State;
use labelwise_core::domain::ingredient_analysis::{
    entities::ScanReport, ports::IngredientAnalysisService, value_objects::AnalyzeTextInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_analysis::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanReportResponse {
    pub data: ScanReport,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "ingredient-analysis",
    summary = "Analyze ingredients text",
    description = "Runs the admissibility gate and the ingredient analysis engine on text that was already extracted from a label",
    responses(
        (status = 200, body = ScanReportResponse),
        (status = 400, body = ErrorResponse),
        (status = 422, body = ErrorResponse, description = "Text too short or not an ingredients list")
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<ScanReportResponse>, ApiError> {
    let report = state
        .service
        .analyze_text(AnalyzeTextInput {
            text: payload.text,
            allergies: payload.allergies,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanReportResponse { data: report }))
}
