use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicConfig {
    pub app_version: String,
    pub root_path: String,
    pub ocr_language: String,
    pub analysis_delay_ms: u64,
    pub metrics_enabled: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub data: PublicConfig,
}

pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        data: PublicConfig {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            root_path: state.args.server.root_path.clone(),
            ocr_language: state.args.ocr.language.clone(),
            analysis_delay_ms: state.args.analysis.delay_ms,
            metrics_enabled: state.args.server.metrics_enabled,
        },
    })
}
