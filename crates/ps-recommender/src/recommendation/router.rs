use std::sync::Arc;

use axum::{extract::State, routing::post, Router};
use tracing::warn;

use super::engine::{RecommendationEngine, RecommendationResult};
use super::form::QuestionnaireForm;
use crate::error::AppError;

/// Router builder exposing the recommendation endpoint.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/recommendation", post(recommend_handler))
        .with_state(engine)
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    axum::Json(form): axum::Json<QuestionnaireForm>,
) -> Result<axum::Json<RecommendationResult>, AppError> {
    let result = engine.submit(&form).map_err(|error| {
        warn!(%error, "questionnaire rejected");
        AppError::from(error)
    })?;
    Ok(axum::Json(result))
}
