// src/engine/filter.rs

use crate::models::{category::CategoryId, question::Question};

/// Keeps the questions assigned to `category`, in their original order.
/// Unassigned questions never match.
pub fn filter_by_category<'a, I>(items: I, category: CategoryId) -> Vec<&'a Question>
where
    I: IntoIterator<Item = &'a Question>,
{
    items
        .into_iter()
        .filter(|q| q.category == Some(category))
        .collect()
}

/// Case-insensitive substring search over the question text.
///
/// A missing or empty phrase matches every question.
pub fn search<'a, I>(items: I, phrase: Option<&str>) -> Vec<&'a Question>
where
    I: IntoIterator<Item = &'a Question>,
{
    let needle = match phrase {
        Some(p) if !p.is_empty() => p.to_lowercase(),
        _ => return items.into_iter().collect(),
    };

    items
        .into_iter()
        .filter(|q| q.text.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionId;

    fn question(id: i64, text: &str, category: Option<i64>) -> Question {
        Question {
            id: QuestionId(id),
            text: text.to_string(),
            answer: "answer".to_string(),
            category: category.map(CategoryId),
            difficulty: 1,
            created_at: None,
        }
    }

    fn bank() -> Vec<Question> {
        vec![
            question(1, "What is the heaviest organ in the human body?", Some(1)),
            question(2, "Who discovered penicillin?", Some(1)),
            question(3, "What is the largest lake in Africa?", Some(1)),
            question(4, "Which artist painted Starry Night?", Some(2)),
            question(5, "Unsorted trivia", None),
        ]
    }

    fn ids(items: &[&Question]) -> Vec<i64> {
        items.iter().map(|q| q.id.0).collect()
    }

    #[test]
    fn category_filter_keeps_order() {
        let bank = bank();
        assert_eq!(ids(&filter_by_category(&bank, CategoryId(1))), vec![1, 2, 3]);
        assert_eq!(ids(&filter_by_category(&bank, CategoryId(2))), vec![4]);
    }

    #[test]
    fn category_filter_and_complement_partition_the_bank() {
        let bank = bank();
        for c in [1, 2, 99] {
            let matched = filter_by_category(&bank, CategoryId(c));
            let rest: Vec<&Question> = bank
                .iter()
                .filter(|q| q.category != Some(CategoryId(c)))
                .collect();
            assert_eq!(matched.len() + rest.len(), bank.len());
        }
    }

    #[test]
    fn unknown_category_is_empty() {
        assert!(filter_by_category(&bank(), CategoryId(42)).is_empty());
    }

    #[test]
    fn search_ignores_case() {
        let bank = bank();
        assert_eq!(ids(&search(&bank, Some("WHAT IS"))), vec![1, 3]);
        assert_eq!(ids(&search(&bank, Some("penicillin"))), vec![2]);
    }

    #[test]
    fn empty_phrase_matches_all() {
        let bank = bank();
        assert_eq!(ids(&search(&bank, Some(""))), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&search(&bank, None)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search(&bank(), Some("zz-no-match")).is_empty());
    }

    #[test]
    fn filters_compose_in_either_order() {
        let bank = bank();
        let a = search(filter_by_category(&bank, CategoryId(1)), Some("what"));
        let b = filter_by_category(search(&bank, Some("what")), CategoryId(1));
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), vec![1, 3]);
    }
}
