use axum::extract::State;
use labelwise_core::domain::ingredient_analysis::{
    entities::GateVerdict, ports::IngredientAnalysisService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_analysis::validators::CheckTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GateVerdictResponse {
    pub data: GateVerdict,
}

#[utoipa::path(
    post,
    path = "/check",
    tag = "ingredient-analysis",
    summary = "Check whether text looks like an ingredients list",
    responses(
        (status = 200, body = GateVerdictResponse)
    ),
    request_body = CheckTextRequest
)]
pub async fn check_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckTextRequest>,
) -> Result<Response<GateVerdictResponse>, ApiError> {
    let verdict = state.service.check_text(&payload.text);

    Ok(Response::OK(GateVerdictResponse { data: verdict }))
}
