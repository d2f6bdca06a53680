use crate::domain::ingredient_analysis::{
    engine::RatedAnalysis,
    entities::{ScanReport, ScanSource},
    matching::{allergy_risk, annotate_ingredients},
};

/// Wraps an analysis result with display annotations and summary ratings.
pub fn create_scan_report(
    source: ScanSource,
    extracted_text: String,
    analysis: RatedAnalysis,
) -> ScanReport {
    let RatedAnalysis { result, rating } = analysis;
    let annotations = annotate_ingredients(&result);
    let risk = allergy_risk(&result.allergies);

    ScanReport::new(source, extracted_text, result, annotations, rating, risk)
}
