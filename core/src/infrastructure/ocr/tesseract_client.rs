use std::{process::Stdio, time::Duration};

use tokio::{io::AsyncWriteExt, process::Command};

use crate::domain::{
    common::{OcrConfig, entities::app_errors::CoreError},
    ingredient_analysis::ports::TextExtractor,
};

const EXTRACTION_FAILED: &str =
    "Failed to extract text from image. Please ensure the image clearly shows ingredients text.";

/// Runs a local `tesseract` binary, streaming the image through stdin.
#[derive(Debug, Clone)]
pub struct TesseractOcrClient {
    binary: String,
    language: String,
    timeout: Duration,
}

impl TesseractOcrClient {
    pub fn new(config: OcrConfig) -> Self {
        Self {
            binary: config.tesseract_path,
            language: config.language,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args(["stdin", "stdout", "-l", self.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    async fn run(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        let mut child = self.command().spawn().map_err(|e| {
            tracing::error!("Failed to start tesseract ({}): {}", self.binary, e);
            CoreError::ExtractionFailure(EXTRACTION_FAILED.to_string())
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&image_data).await.map_err(|e| {
                tracing::error!("Failed to feed image to tesseract: {}", e);
                CoreError::ExtractionFailure(EXTRACTION_FAILED.to_string())
            })?;
        }

        let output = child.wait_with_output().await.map_err(|e| {
            tracing::error!("tesseract did not finish: {}", e);
            CoreError::ExtractionFailure(EXTRACTION_FAILED.to_string())
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!("tesseract exited with {}: {}", output.status, stderr.trim());
            return Err(CoreError::ExtractionFailure(EXTRACTION_FAILED.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl TextExtractor for TesseractOcrClient {
    async fn extract_text(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        tracing::debug!(bytes = image_data.len(), language = %self.language, "running OCR");

        tokio::time::timeout(self.timeout, self.run(image_data))
            .await
            .map_err(|_| {
                tracing::error!("tesseract timed out after {:?}", self.timeout);
                CoreError::ExtractionFailure(EXTRACTION_FAILED.to_string())
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_extraction_failure() {
        let client = TesseractOcrClient::new(OcrConfig {
            tesseract_path: "/nonexistent/labelwise-tesseract".to_string(),
            ..OcrConfig::default()
        });

        let err = client.extract_text(vec![1, 2, 3]).await.unwrap_err();
        assert!(matches!(err, CoreError::ExtractionFailure(_)));
    }
}
