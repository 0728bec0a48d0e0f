// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error,
    handlers::{categories, questions, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (categories, questions, quizzes).
/// * Answers unknown routes and wrong methods with the JSON error envelope.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (question store and configuration).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let category_routes = Router::new()
        .route("/", get(categories::list_categories))
        .route("/{id}/questions", get(categories::questions_by_category));

    let question_routes = Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/search", post(questions::search_questions))
        .route("/{id}", delete(questions::delete_question));

    let quiz_routes = Router::new().route("/", post(quiz::next_question));

    Router::new()
        .nest("/api/categories", category_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/quizzes", quiz_routes)
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
