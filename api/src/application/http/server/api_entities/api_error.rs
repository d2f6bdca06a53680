use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use labelwise_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    ExtractionFailure(String),

    #[error("{0}")]
    NotAnIngredientsList(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::ExtractionFailure(message) => ApiError::ExtractionFailure(message),
            CoreError::NotAnIngredientsList => {
                ApiError::NotAnIngredientsList(CoreError::NotAnIngredientsList.to_string())
            }
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::AnalysisFailure(message) => {
                tracing::error!("Analysis failed: {}", message);
                ApiError::InternalServerError(
                    "Failed to analyze ingredients. Please try again with a clearer image."
                        .to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::ValidationError(_) => (StatusCode::BAD_REQUEST, "E_VALIDATION"),
            ApiError::ExtractionFailure(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_EXTRACTION_FAILURE")
            }
            ApiError::NotAnIngredientsList(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "E_NOT_AN_INGREDIENTS_LIST",
            ),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_api_errors() {
        assert_eq!(
            ApiError::from(CoreError::not_enough_text()),
            ApiError::ExtractionFailure(CoreError::not_enough_text().to_string())
        );
        assert!(matches!(
            ApiError::from(CoreError::NotAnIngredientsList),
            ApiError::NotAnIngredientsList(_)
        ));
        assert_eq!(
            ApiError::from(CoreError::Invalid("image is empty".to_string())),
            ApiError::BadRequest("image is empty".to_string())
        );
    }

    #[test]
    fn test_analysis_failure_hides_details() {
        let error = ApiError::from(CoreError::AnalysisFailure("bad upstream json".to_string()));
        assert!(matches!(&error, ApiError::InternalServerError(m) if !m.contains("upstream")));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_gate_rejection_is_unprocessable() {
        let response = ApiError::from(CoreError::NotAnIngredientsList).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
