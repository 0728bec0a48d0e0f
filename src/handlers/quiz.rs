// src/handlers/quiz.rs

use axum::{extract::State, response::IntoResponse};

use crate::{
    engine::{QuizSession, QuizTurn},
    error::AppError,
    extract::Json,
    models::quiz::{QuizRequest, QuizResponse},
    store::SharedStore,
};

/// Returns the next quiz question.
///
/// * Plays within `quiz_category`, or across all categories when it is missing or 0.
/// * Never returns an id listed in `previous_questions`.
/// * When nothing is left, answers `exhausted: true` so the client can end the round.
///
/// The round's state travels with the request; nothing is kept between calls.
pub async fn next_question(
    State(store): State<SharedStore>,
    Json(req): Json<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let bank = store.questions().await?;

    let mut session = QuizSession::resume(req.category(), req.previous_questions.iter().copied());
    let response = match session.next(&bank, &mut rand::thread_rng()) {
        QuizTurn::Question(question) => QuizResponse::question(question.clone()),
        QuizTurn::Exhausted => {
            tracing::info!(
                category = ?session.category(),
                asked = session.excluded_ids().len(),
                "Quiz round exhausted"
            );
            QuizResponse::exhausted()
        }
    };

    Ok(Json(response))
}
