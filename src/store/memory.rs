// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{
        category::{Category, CategoryId, DEFAULT_CATEGORIES},
        question::{NewQuestion, Question, QuestionId},
    },
};

use super::QuestionStore;

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_category_id: i64,
    next_question_id: i64,
}

/// Process-local store used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the default trivia categories and no questions.
    pub fn with_default_categories() -> Self {
        let mut tables = Tables::default();
        for label in DEFAULT_CATEGORIES {
            tables.add_category(label);
        }
        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Tables {
    fn add_category(&mut self, label: &str) -> Category {
        self.next_category_id += 1;
        let category = Category {
            id: CategoryId(self.next_category_id),
            category_type: label.to_string(),
        };
        self.categories.push(category.clone());
        category
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn questions(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, AppError> {
        let mut tables = self.tables.write().await;
        tables.next_question_id += 1;

        let question = Question {
            id: QuestionId(tables.next_question_id),
            text: new.text,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
            created_at: Some(chrono::Utc::now()),
        };
        tables.questions.push(question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);

        if tables.questions.len() == before {
            return Err(AppError::NotFound("Question not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            text: text.to_string(),
            answer: "answer".to_string(),
            difficulty: 3,
            category: Some(CategoryId(category)),
        }
    }

    #[tokio::test]
    async fn seeds_default_categories_in_order() {
        let store = InMemoryStore::with_default_categories();
        let categories = store.categories().await.unwrap();

        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].id, CategoryId(1));
        assert_eq!(categories[0].category_type, "Science");
        assert_eq!(
            store.category(CategoryId(6)).await.unwrap().unwrap().category_type,
            "Sports"
        );
        assert!(store.category(CategoryId(7)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_stable_after_deletes() {
        let store = InMemoryStore::with_default_categories();
        let first = store.insert_question(new_question("First", 1)).await.unwrap();
        let second = store.insert_question(new_question("Second", 1)).await.unwrap();

        store.delete_question(first.id).await.unwrap();
        let third = store.insert_question(new_question("Third", 2)).await.unwrap();

        let ids: Vec<QuestionId> = store.questions().await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![second.id, third.id]);
        assert_eq!(third.id, QuestionId(3));
    }

    #[tokio::test]
    async fn deleting_missing_question_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.delete_question(QuestionId(100)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
