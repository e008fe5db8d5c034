// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, service::QueryService};

/// Lists every question in the store, ascending by id.
pub async fn list_questions(
    State(service): State<QueryService>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(service.list_all().to_vec()))
}

/// Serves one uniformly random question; 404 when the store is empty.
pub async fn random_question(
    State(service): State<QueryService>,
) -> Result<impl IntoResponse, AppError> {
    let question = service.pick_random()?;
    Ok(Json(question.clone()))
}

/// Lists all questions whose topic matches the path parameter
/// case-insensitively; 404 when nothing matches.
pub async fn questions_by_topic(
    State(service): State<QueryService>,
    Path(topic): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let questions = service.filter_by_topic(&topic)?;
    Ok(Json(questions))
}
