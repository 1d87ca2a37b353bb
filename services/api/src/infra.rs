use metrics_exporter_prometheus::PrometheusHandle;
use ps_recommender::config::AppConfig;
use ps_recommender::error::AppError;
use ps_recommender::recommendation::RecommendationEngine;
use serde::de::DeserializeOwned;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_engine(config: &AppConfig) -> Result<RecommendationEngine, AppError> {
    let catalog = config.catalog.load()?;
    match &config.catalog.path {
        Some(path) => info!(path = %path.display(), "pricing catalog loaded from file"),
        None => info!("using built-in pricing catalog"),
    }
    Ok(RecommendationEngine::new(catalog))
}

/// Parse a questionnaire option from its wire name, accepting dashes for underscores.
pub(crate) fn parse_selection<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let token = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(token))
        .map_err(|err| format!("'{raw}' is not a recognised option ({err})"))
}
