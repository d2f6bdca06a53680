use crate::{
    domain::common::{LabelwiseConfig, services::Service},
    infrastructure::ocr::TesseractOcrClient,
};

pub type LabelwiseService = Service<TesseractOcrClient>;

pub fn create_service(config: LabelwiseConfig) -> LabelwiseService {
    tracing::info!(
        tesseract = %config.ocr.tesseract_path,
        language = %config.ocr.language,
        "creating analysis service"
    );

    Service::new(TesseractOcrClient::new(config.ocr), config.analysis)
}
