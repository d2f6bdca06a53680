use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// OCR produced nothing usable, or the OCR engine itself failed.
    #[error("{0}")]
    ExtractionFailure(String),

    #[error(
        "The image does not appear to contain an ingredients list. Please upload an image of product ingredients."
    )]
    NotAnIngredientsList,

    #[error("Failed to analyze ingredients: {0}")]
    AnalysisFailure(String),

    #[error("Invalid input: {0}")]
    Invalid(String),
}

impl CoreError {
    pub fn not_enough_text() -> Self {
        CoreError::ExtractionFailure(
            "Could not detect enough text to analyze. Please provide a clearer image or more of the ingredients text."
                .to_string(),
        )
    }
}
