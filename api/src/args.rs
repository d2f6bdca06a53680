use clap::Parser;
use labelwise_core::domain::common::{AnalysisConfig, LabelwiseConfig, OcrConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "labelwise", version, about = "Ingredient label analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OcrArgs {
    #[arg(long = "tesseract-path", env = "TESSERACT_PATH", default_value = "tesseract")]
    pub tesseract_path: String,

    #[arg(long = "ocr-language", env = "OCR_LANGUAGE", default_value = "eng")]
    pub language: String,

    #[arg(long = "ocr-timeout-secs", env = "OCR_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalysisArgs {
    /// Pause after each analysis, in milliseconds
    #[arg(long = "analysis-delay-ms", env = "ANALYSIS_DELAY_MS", default_value_t = 0)]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for LabelwiseConfig {
    fn from(args: Args) -> Self {
        LabelwiseConfig {
            ocr: OcrConfig {
                tesseract_path: args.ocr.tesseract_path,
                language: args.ocr.language,
                timeout_secs: args.ocr.timeout_secs,
            },
            analysis: AnalysisConfig {
                delay_ms: args.analysis.delay_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "labelwise",
            "--tesseract-path",
            "/usr/local/bin/tesseract",
            "--ocr-language",
            "eng+fra",
            "--analysis-delay-ms",
            "1500",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = LabelwiseConfig::from(args);
        assert_eq!(config.ocr.tesseract_path, "/usr/local/bin/tesseract");
        assert_eq!(config.ocr.language, "eng+fra");
        assert_eq!(config.ocr.timeout_secs, 30);
        assert_eq!(config.analysis.delay_ms, 1500);
    }
}
