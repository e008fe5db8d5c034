// src/routes.rs

use axum::{Router, http::Method, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{meta, questions},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the question routes and the meta routes (index, health).
/// * Applies global middleware (Trace, permissive CORS).
/// * Injects global state (Query Service + Config).
pub fn create_router(state: AppState) -> Router {
    // The API is public and read-only, so any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let question_routes = Router::new()
        .route("/", get(questions::list_questions))
        .route("/random", get(questions::random_question))
        .route("/topic/{topic}", get(questions::questions_by_topic));

    Router::new()
        .route("/", get(meta::api_index))
        .nest("/api/questions", question_routes)
        .route("/api/health", get(meta::health))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
