// src/handlers/categories.rs

use axum::{extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    engine::{self, Page},
    error::AppError,
    extract::{Json, Path, Query},
    models::{
        category::{CategoryId, category_map},
        question::{PageParams, Question},
    },
    store::SharedStore,
};

/// Lists all categories as an `{id: type}` map.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.categories().await?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

/// Lists the questions of one category, 10 per page.
///
/// An unknown category is not an error: it answers with no questions and a
/// total of 0.
pub async fn questions_by_category(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let id = CategoryId(id);
    let Some(category) = store.category(id).await? else {
        tracing::debug!(category_id = %id, "Unknown category");
        let page = Page::<Question>::empty();
        return Ok(Json(json!({
            "success": true,
            "questions": page.items,
            "total_questions": page.total_count,
            "current_category": null,
        })));
    };

    let questions = store.questions().await?;
    let matches = engine::filter_by_category(&questions, category.id);
    let page = Page::of(&matches, params.page());

    Ok(Json(json!({
        "success": true,
        "questions": page.items,
        "total_questions": page.total_count,
        "current_category": category.category_type,
    })))
}
