use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LabelwiseConfig {
    pub ocr: OcrConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub tesseract_path: String,
    pub language: String,
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: "tesseract".to_string(),
            language: "eng".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnalysisConfig {
    /// Artificial pause after analysis, mirroring the latency of a remote model call.
    pub delay_ms: u64,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
