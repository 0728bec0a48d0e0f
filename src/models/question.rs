// src/models/question.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use super::category::CategoryId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct QuestionId(pub i64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,

    /// The text of the question.
    /// Stored in the 'question' column and exposed under the same key.
    #[sqlx(rename = "question")]
    #[serde(rename = "question")]
    pub text: String,

    pub answer: String,

    /// `None` when the question is not assigned to any category.
    pub category: Option<CategoryId>,

    /// Difficulty from 1 (easy) to 5 (hard).
    pub difficulty: i32,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuestion {
    #[serde(rename = "question")]
    #[validate(
        length(min = 1, max = 1000, message = "Question text must be between 1 and 1000 chars"),
        custom(function = validate_not_blank)
    )]
    pub text: String,

    #[validate(length(min = 1, max = 500, message = "Answer must be between 1 and 500 chars"))]
    pub answer: String,

    #[validate(range(min = 1, max = 5, message = "Difficulty must be between 1 and 5"))]
    pub difficulty: i32,

    /// Missing or null leaves the question unassigned.
    #[serde(default)]
    pub category: Option<CategoryId>,
}

/// Query parameters shared by every paginated listing.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageParams {
    /// 1-indexed page number (default: 1).
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> usize {
        usize::try_from(self.page.unwrap_or(1)).unwrap_or(usize::MAX)
    }
}

/// DTO for a question search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Substring to look for; missing or empty matches every question.
    #[serde(alias = "searchTerm", default)]
    pub search_term: Option<String>,
}

fn validate_not_blank(text: &str) -> Result<(), validator::ValidationError> {
    if text.trim().is_empty() {
        return Err(validator::ValidationError::new("question_cannot_be_blank"));
    }
    Ok(())
}
