use std::sync::Arc;

use crate::domain::{common::AnalysisConfig, ingredient_analysis::ports::TextExtractor};

#[derive(Clone)]
pub struct Service<O>
where
    O: TextExtractor,
{
    pub(crate) text_extractor: Arc<O>,
    pub(crate) analysis_config: AnalysisConfig,
}

impl<O> Service<O>
where
    O: TextExtractor,
{
    pub fn new(text_extractor: O, analysis_config: AnalysisConfig) -> Self {
        Self {
            text_extractor: Arc::new(text_extractor),
            analysis_config,
        }
    }
}
