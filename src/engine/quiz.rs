// src/engine/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::models::{
    category::CategoryId,
    question::{Question, QuestionId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Active,
    /// Terminal: no eligible question was left.
    Exhausted,
}

/// Outcome of asking for the next quiz question.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizTurn<'a> {
    Question(&'a Question),
    Exhausted,
}

/// Per-player quiz state.
///
/// The caller owns the session and hands it back on every call; nothing about
/// a running quiz is kept by the service itself.
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// `None` plays across all categories.
    category: Option<CategoryId>,
    excluded_ids: HashSet<QuestionId>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(category: Option<CategoryId>) -> Self {
        Self::resume(category, std::iter::empty())
    }

    /// Rebuilds a session from the ids the player has already seen.
    pub fn resume<I>(category: Option<CategoryId>, excluded_ids: I) -> Self
    where
        I: IntoIterator<Item = QuestionId>,
    {
        Self {
            category,
            excluded_ids: excluded_ids.into_iter().collect(),
            state: QuizState::Active,
        }
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn excluded_ids(&self) -> &HashSet<QuestionId> {
        &self.excluded_ids
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Questions that may still be asked in this session, in bank order.
    pub fn eligible<'a>(&self, bank: &'a [Question]) -> Vec<&'a Question> {
        bank.iter()
            .filter(|q| self.category.is_none() || q.category == self.category)
            .filter(|q| !self.excluded_ids.contains(&q.id))
            .collect()
    }

    /// Draws the next question uniformly from the eligible set and excludes it
    /// from later draws. Once the eligible set runs dry the session stays
    /// exhausted.
    pub fn next<'a, R>(&mut self, bank: &'a [Question], rng: &mut R) -> QuizTurn<'a>
    where
        R: Rng + ?Sized,
    {
        if self.state == QuizState::Exhausted {
            return QuizTurn::Exhausted;
        }

        let eligible = self.eligible(bank);
        match eligible.choose(rng) {
            Some(&question) => {
                self.excluded_ids.insert(question.id);
                tracing::debug!(
                    question_id = %question.id,
                    remaining = eligible.len() - 1,
                    "Selected quiz question"
                );
                QuizTurn::Question(question)
            }
            None => {
                self.state = QuizState::Exhausted;
                tracing::debug!(category = ?self.category, "Quiz exhausted");
                QuizTurn::Exhausted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id: QuestionId(id),
            text: format!("Question {id}"),
            answer: "answer".to_string(),
            category: Some(CategoryId(category)),
            difficulty: 2,
            created_at: None,
        }
    }

    /// Ids 1..=3 in category A (1), id 4 in category B (2).
    fn bank() -> Vec<Question> {
        vec![question(1, 1), question(2, 1), question(3, 1), question(4, 2)]
    }

    #[test]
    fn never_repeats_and_exhausts() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = QuizSession::new(None);
        let mut seen = HashSet::new();

        for _ in 0..bank.len() {
            match session.next(&bank, &mut rng) {
                QuizTurn::Question(q) => assert!(seen.insert(q.id), "repeated {}", q.id),
                QuizTurn::Exhausted => panic!("exhausted too early"),
            }
        }

        assert_eq!(session.next(&bank, &mut rng), QuizTurn::Exhausted);
        assert_eq!(session.state(), QuizState::Exhausted);
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn respects_category() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(Some(CategoryId(2)));

        match session.next(&bank, &mut rng) {
            QuizTurn::Question(q) => assert_eq!(q.id, QuestionId(4)),
            QuizTurn::Exhausted => panic!("expected question 4"),
        }
        assert_eq!(session.next(&bank, &mut rng), QuizTurn::Exhausted);
    }

    #[test]
    fn excluded_ids_exhaust_immediately() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::resume(
            Some(CategoryId(1)),
            [QuestionId(1), QuestionId(2), QuestionId(3)],
        );
        assert_eq!(session.next(&bank, &mut rng), QuizTurn::Exhausted);
    }

    #[test]
    fn exhausted_is_terminal_even_if_bank_grows() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new(Some(CategoryId(1)));
        assert_eq!(session.next(&[], &mut rng), QuizTurn::Exhausted);
        assert_eq!(session.next(&bank(), &mut rng), QuizTurn::Exhausted);
    }

    #[test]
    fn unknown_category_exhausts() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = QuizSession::new(Some(CategoryId(99)));
        assert_eq!(session.next(&bank(), &mut rng), QuizTurn::Exhausted);
    }

    #[test]
    fn unassigned_questions_only_play_in_any_category() {
        let mut bank = bank();
        bank.push(Question {
            category: None,
            ..question(5, 1)
        });
        let mut rng = StdRng::seed_from_u64(9);

        let mut any = QuizSession::resume(None, (1..=4).map(QuestionId));
        match any.next(&bank, &mut rng) {
            QuizTurn::Question(q) => assert_eq!(q.id, QuestionId(5)),
            QuizTurn::Exhausted => panic!("expected the unassigned question"),
        }

        for c in [1, 2] {
            let session = QuizSession::new(Some(CategoryId(c)));
            assert!(session.eligible(&bank).iter().all(|q| q.id != QuestionId(5)));
        }
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<QuestionId, usize> = HashMap::new();
        let trials = 3000;

        for _ in 0..trials {
            let mut session = QuizSession::new(Some(CategoryId(1)));
            if let QuizTurn::Question(q) = session.next(&bank, &mut rng) {
                *counts.entry(q.id).or_default() += 1;
            }
        }

        assert_eq!(counts.len(), 3);
        for id in 1..=3 {
            let n = counts[&QuestionId(id)];
            assert!((800..=1200).contains(&n), "question {id} drawn {n} times");
        }
    }
}
