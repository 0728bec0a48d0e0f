// src/store/mod.rs

//! Storage for questions and categories.
//!
//! Handlers only see the `QuestionStore` trait; the backend is picked at
//! startup from the configuration.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        category::{Category, CategoryId},
        question::{NewQuestion, Question, QuestionId},
    },
};

pub use memory::InMemoryStore;
pub use postgres::PgStore;

/// Shared handle injected into the router state.
pub type SharedStore = Arc<dyn QuestionStore>;

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, AppError>;

    async fn category(&self, id: CategoryId) -> Result<Option<Category>, AppError> {
        Ok(self.categories().await?.into_iter().find(|c| c.id == id))
    }

    /// Snapshot of the whole question bank, ordered by id.
    async fn questions(&self) -> Result<Vec<Question>, AppError>;

    /// Stores a question and returns it with its assigned id.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, AppError>;

    /// Fails with `NotFound` when no question has this id.
    async fn delete_question(&self, id: QuestionId) -> Result<(), AppError>;
}
