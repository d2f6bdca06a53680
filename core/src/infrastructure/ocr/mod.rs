pub mod tesseract_client;

pub use tesseract_client::TesseractOcrClient;
