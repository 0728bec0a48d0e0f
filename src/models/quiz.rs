// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use super::{
    category::CategoryId,
    question::{Question, QuestionId},
};

/// DTO for asking the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown to the player in this round.
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,

    /// Missing, null, or id 0 plays across all categories.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category picked on the play screen.
/// The label the frontend echoes back under `type` is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryId,
}

impl QuizRequest {
    /// The category to play, `None` meaning any.
    pub fn category(&self) -> Option<CategoryId> {
        self.quiz_category
            .as_ref()
            .map(|c| c.id)
            .filter(|id| id.0 != 0)
    }
}

/// Response for the next quiz question.
/// `question` is null exactly when the round is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    pub exhausted: bool,
}

impl QuizResponse {
    pub fn question(question: Question) -> Self {
        Self {
            success: true,
            question: Some(question),
            exhausted: false,
        }
    }

    pub fn exhausted() -> Self {
        Self {
            success: true,
            question: None,
            exhausted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let numeric: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [1, 2], "quiz_category": {"type": "Science", "id": 1}}"#,
        )
        .unwrap();
        let text: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"type": "Science", "id": "1"}}"#).unwrap();

        assert_eq!(numeric.category(), Some(CategoryId(1)));
        assert_eq!(text.category(), Some(CategoryId(1)));
        assert_eq!(numeric.previous_questions, vec![QuestionId(1), QuestionId(2)]);
        assert!(text.previous_questions.is_empty());
    }

    #[test]
    fn zero_or_missing_category_means_any() {
        let click: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"type": "click", "id": 0}}"#).unwrap();
        let missing: QuizRequest = serde_json::from_str("{}").unwrap();
        let null: QuizRequest = serde_json::from_str(r#"{"quiz_category": null}"#).unwrap();

        assert_eq!(click.category(), None);
        assert_eq!(missing.category(), None);
        assert_eq!(null.category(), None);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result = serde_json::from_str::<QuizRequest>(r#"{"quiz_category": {"id": "a"}}"#);
        assert!(result.is_err());
    }
}
