use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient_analysis::{
        entities::{GateVerdict, ScanReport},
        value_objects::{AnalyzeTextInput, ScanImageInput},
    },
};

/// OCR collaborator turning an image into its best-effort text.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract_text(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the scan pipeline
#[cfg_attr(test, mockall::automock)]
pub trait IngredientAnalysisService: Send + Sync {
    fn scan_image(
        &self,
        input: ScanImageInput,
    ) -> impl Future<Output = Result<ScanReport, CoreError>> + Send;

    fn analyze_text(
        &self,
        input: AnalyzeTextInput,
    ) -> impl Future<Output = Result<ScanReport, CoreError>> + Send;

    fn check_text(&self, text: &str) -> GateVerdict;
}
