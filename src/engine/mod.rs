// src/engine/mod.rs

//! Question selection and pagination.
//!
//! Everything here is pure and synchronous: functions take a snapshot of the
//! question bank and compute the subset and order to return.

pub mod filter;
pub mod pagination;
pub mod quiz;

pub use filter::{filter_by_category, search};
pub use pagination::{Page, QUESTIONS_PER_PAGE, paginate};
pub use quiz::{QuizSession, QuizState, QuizTurn};
