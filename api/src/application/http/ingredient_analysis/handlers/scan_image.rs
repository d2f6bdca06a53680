use axum::extract::{Multipart, State};
use labelwise_core::domain::ingredient_analysis::{
    ports::IngredientAnalysisService, value_objects::ScanImageInput,
};

use crate::application::http::{
    ingredient_analysis::{
        handlers::analyze_text::ScanReportResponse, validators::MAX_ALLERGIES,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/image",
    tag = "ingredient-analysis",
    summary = "Scan a label photo",
    description = "Extracts text from the uploaded image with OCR, then analyzes it. Multipart fields: `image` (required) and `allergies` (repeatable or comma-separated)",
    responses(
        (status = 200, body = ScanReportResponse),
        (status = 400, body = ErrorResponse),
        (status = 422, body = ErrorResponse, description = "OCR failed or the image is not an ingredients label")
    ),
)]
pub async fn scan_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanReportResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut allergies: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            "allergies" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read allergies: {}", e))
                })?;
                allergies.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|allergy| !allergy.is_empty())
                        .map(str::to_string),
                );
            }
            _ => {}
        }
    }

    if allergies.len() as u64 > MAX_ALLERGIES {
        return Err(ApiError::ValidationError(format!(
            "at most {} allergies can be checked at once",
            MAX_ALLERGIES
        )));
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let report = state
        .service
        .scan_image(ScanImageInput {
            image_data,
            allergies,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanReportResponse { data: report }))
}
