// src/handlers/questions.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    engine::{self, Page},
    error::AppError,
    extract::{Json, Path, Query},
    models::{
        category::category_map,
        question::{NewQuestion, PageParams, QuestionId, SearchRequest},
    },
    store::SharedStore,
};

/// Lists the question bank, 10 per page.
///
/// Also returns the category map so the frontend can render the sidebar.
/// A page past the end returns an empty list with the real total.
pub async fn list_questions(
    State(store): State<SharedStore>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let questions = store.questions().await?;
    let categories = store.categories().await?;
    let page = Page::of(&questions, params.page());

    Ok(Json(json!({
        "success": true,
        "questions": page.items,
        "total_questions": page.total_count,
        "categories": category_map(&categories),
        "current_category": null,
    })))
}

/// Creates a new question.
/// A referenced category must exist; without one the question is unassigned.
pub async fn create_question(
    State(store): State<SharedStore>,
    Json(payload): Json<NewQuestion>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    if let Some(category) = payload.category {
        if store.category(category).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                category
            )));
        }
    }

    let question = store.insert_question(payload).await?;
    tracing::info!(question_id = %question.id, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "created": question.id})),
    ))
}

/// Deletes a question by ID and returns the requested page of what remains.
pub async fn delete_question(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let id = QuestionId(id);
    store.delete_question(id).await?;
    tracing::info!(question_id = %id, "Question deleted");

    let questions = store.questions().await?;
    let page = Page::of(&questions, params.page());

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "questions": page.items,
        "total_questions": page.total_count,
    })))
}

/// Case-insensitive substring search over question text.
///
/// An empty or missing search term matches every question. No match is an
/// empty success, not an error.
pub async fn search_questions(
    State(store): State<SharedStore>,
    Query(params): Query<PageParams>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let questions = store.questions().await?;
    let matches = engine::search(&questions, req.search_term.as_deref());
    tracing::debug!(
        term = ?req.search_term,
        matches = matches.len(),
        "Searched questions"
    );
    let page = Page::of(&matches, params.page());

    Ok(Json(json!({
        "success": true,
        "questions": page.items,
        "total_questions": page.total_count,
        "current_category": null,
    })))
}
