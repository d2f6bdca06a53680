use labelwise_core::domain::ingredient_analysis::schema::analysis_result_schema;

use crate::application::http::server::api_entities::response::Response;

#[utoipa::path(
    get,
    path = "/schema",
    tag = "ingredient-analysis",
    summary = "JSON schema of the analysis result",
    responses(
        (status = 200, body = serde_json::Value)
    ),
)]
pub async fn get_schema() -> Response<serde_json::Value> {
    Response::OK(analysis_result_schema())
}
