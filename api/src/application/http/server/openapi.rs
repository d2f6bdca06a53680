use crate::application::http::{
    health::HealthApiDoc, ingredient_analysis::router::IngredientAnalysisApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Labelwise API"
    ),
    nest(
        (path = "/analysis", api = IngredientAnalysisApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
