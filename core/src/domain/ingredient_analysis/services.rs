use std::{panic, time::Duration};

use tracing::{info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient_analysis::{
        engine::analyze_rated,
        entities::{GateVerdict, ScanReport, ScanSource},
        gate,
        helpers::create_scan_report,
        ports::{IngredientAnalysisService, TextExtractor},
        value_objects::{AnalyzeTextInput, ScanImageInput},
    },
};

impl<O> Service<O>
where
    O: TextExtractor,
{
    async fn run_pipeline(
        &self,
        source: ScanSource,
        text: String,
        allergies: Vec<String>,
    ) -> Result<ScanReport, CoreError> {
        // 1. Reject near-empty OCR output
        if !gate::has_enough_text(&text) {
            warn!(chars = text.trim().chars().count(), "not enough text to analyze");
            return Err(CoreError::not_enough_text());
        }

        // 2. Make sure this looks like an ingredients label
        let verdict = gate::evaluate(&text);
        if !verdict.accepted {
            info!(gate_score = verdict.score, "text rejected as ingredients list");
            return Err(CoreError::NotAnIngredientsList);
        }

        // 3. Analyze
        let analysis = panic::catch_unwind(|| analyze_rated(&text, &allergies)).map_err(|_| {
            tracing::error!("ingredient analysis panicked");
            CoreError::AnalysisFailure("unexpected fault while analyzing ingredients".to_string())
        })?;

        if self.analysis_config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.analysis_config.delay_ms)).await;
        }

        // 4. Wrap for presentation
        let report = create_scan_report(source, text, analysis);

        info!(
            scan_id = %report.id,
            source = ?report.source,
            score = report.result.score,
            allergens = report.result.allergies.len(),
            additives = report.result.additives.len(),
            "scan analyzed"
        );

        Ok(report)
    }
}

impl<O> IngredientAnalysisService for Service<O>
where
    O: TextExtractor,
{
    async fn scan_image(&self, input: ScanImageInput) -> Result<ScanReport, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("image is empty".to_string()));
        }

        let text = self.text_extractor.extract_text(input.image_data).await?;
        tracing::debug!(chars = text.len(), "text extracted from image");

        self.run_pipeline(ScanSource::Image, text, input.allergies)
            .await
    }

    async fn analyze_text(&self, input: AnalyzeTextInput) -> Result<ScanReport, CoreError> {
        self.run_pipeline(ScanSource::Text, input.text, input.allergies)
            .await
    }

    fn check_text(&self, text: &str) -> GateVerdict {
        gate::evaluate(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::AnalysisConfig,
        ingredient_analysis::{
            entities::{AllergyRisk, HealthRating},
            ports::MockTextExtractor,
        },
    };

    fn service_returning(text: &'static str) -> Service<MockTextExtractor> {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract_text()
            .returning(move |_| Box::pin(async move { Ok(text.to_string()) }));

        Service::new(extractor, AnalysisConfig::default())
    }

    fn image_input(allergies: &[&str]) -> ScanImageInput {
        ScanImageInput {
            image_data: vec![0xFF, 0xD8, 0xFF],
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_scan_image_produces_report() {
        let service = service_returning("Crunchy Co\nPeanut Bar\nIngredients: peanuts, sugar, salt");

        let report = service.scan_image(image_input(&["Peanuts"])).await.unwrap();

        assert_eq!(report.source, ScanSource::Image);
        assert_eq!(report.result.brand_name, "Crunchy Co");
        assert_eq!(report.result.product_name, "Peanut Bar");
        assert!(!report.result.is_safe);
        assert_eq!(report.allergy_risk, AllergyRisk::High);
        assert_eq!(report.annotations.len(), report.result.ingredients.len());
        assert!(report.annotations[0].is_allergen);
    }

    #[tokio::test]
    async fn test_scan_image_rejects_short_text() {
        let service = service_returning("  abc  ");

        let err = service.scan_image(image_input(&[])).await.unwrap_err();
        assert!(matches!(err, CoreError::ExtractionFailure(_)));
    }

    #[tokio::test]
    async fn test_scan_image_rejects_non_ingredients_text() {
        let service = service_returning("TOTAL 12.99 VISA APPROVED THANK YOU");

        let err = service.scan_image(image_input(&[])).await.unwrap_err();
        assert_eq!(err, CoreError::NotAnIngredientsList);
    }

    #[tokio::test]
    async fn test_scan_image_propagates_ocr_failure() {
        let mut extractor = MockTextExtractor::new();
        extractor.expect_extract_text().returning(|_| {
            Box::pin(async { Err(CoreError::ExtractionFailure("ocr crashed".to_string())) })
        });
        let service = Service::new(extractor, AnalysisConfig::default());

        let err = service.scan_image(image_input(&[])).await.unwrap_err();
        assert_eq!(err, CoreError::ExtractionFailure("ocr crashed".to_string()));
    }

    #[tokio::test]
    async fn test_scan_image_rejects_empty_image_without_ocr() {
        let mut extractor = MockTextExtractor::new();
        extractor.expect_extract_text().never();
        let service = Service::new(extractor, AnalysisConfig::default());

        let err = service
            .scan_image(ScanImageInput {
                image_data: vec![],
                allergies: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_analyze_text_skips_ocr() {
        let mut extractor = MockTextExtractor::new();
        extractor.expect_extract_text().never();
        let service = Service::new(extractor, AnalysisConfig::default());

        let report = service
            .analyze_text(AnalyzeTextInput {
                text: "Ingredients: Water, Sugar, Salt".to_string(),
                allergies: vec![],
            })
            .await
            .unwrap();

        assert_eq!(report.source, ScanSource::Text);
        assert_eq!(report.result.score, 60);
        assert!(report.result.is_safe);
        assert_eq!(report.allergy_risk, AllergyRisk::None);
        assert_eq!(report.extracted_text, "Ingredients: Water, Sugar, Salt");
    }

    #[tokio::test]
    async fn test_report_rating_matches_comment_tier() {
        let service = Service::new(MockTextExtractor::new(), AnalysisConfig::default());

        let report = service
            .analyze_text(AnalyzeTextInput {
                text: "Ingredients: milk, dextrose, red 40, rice, pepper, thyme, sage, dill"
                    .to_string(),
                allergies: vec!["Milk".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(report.result.score, 30);
        assert_eq!(report.rating, HealthRating::Poor);
        assert!(report.result.ai_comment.starts_with(
            "This product contains several concerning ingredients"
        ));
    }

    #[test]
    fn test_check_text_runs_gate_only() {
        let service = Service::new(MockTextExtractor::new(), AnalysisConfig::default());
        let verdict = service.check_text("Ingredients: Water, Sugar, Salt");
        assert_eq!(verdict.score, 7);
        assert!(verdict.accepted);
    }
}
