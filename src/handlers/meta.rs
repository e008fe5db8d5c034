// src/handlers/meta.rs

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::service::QueryService;

/// Root index describing the available endpoints.
pub async fn api_index() -> impl IntoResponse {
    Json(json!({
        "message": "AZ-204 Quiz API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "questions": "/api/questions",
            "randomQuestion": "/api/questions/random",
            "questionsByTopic": "/api/questions/topic/{topic}",
            "health": "/api/health"
        }
    }))
}

/// Liveness probe reporting the size of the loaded store.
pub async fn health(State(service): State<QueryService>) -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "questionsCount": service.count(),
    }))
}
