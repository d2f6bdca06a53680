use super::handlers::{
    analyze_text::{__path_analyze_text, analyze_text},
    check_text::{__path_check_text, check_text},
    get_allergens::{__path_get_allergens, get_allergens},
    get_schema::{__path_get_schema, get_schema},
    scan_image::{__path_scan_image, scan_image, MAX_IMAGE_SIZE},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

/// Room for multipart framing and the allergies field on top of the image.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_text, scan_image, check_text, get_allergens, get_schema))]
pub struct IngredientAnalysisApiDoc;

pub fn ingredient_analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/analysis/text", root_path),
            post(analyze_text),
        )
        .route(
            &format!("{}/analysis/image", root_path),
            post(scan_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
        )
        .route(
            &format!("{}/analysis/check", root_path),
            post(check_text),
        )
        .route(
            &format!("{}/analysis/allergens", root_path),
            get(get_allergens),
        )
        .route(
            &format!("{}/analysis/schema", root_path),
            get(get_schema),
        )
}
