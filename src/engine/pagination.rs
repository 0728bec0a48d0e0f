// src/engine/pagination.rs

use serde::Serialize;

/// Number of questions shown per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items`.
///
/// The window is `[(page - 1) * page_size, page * page_size)` clipped to the
/// bounds of `items`. A page past the end, page 0, or a zero `page_size`
/// yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// One page of results plus the size of the unpaginated sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T: Clone> Page<T> {
    /// Slices `items` and records its full length.
    pub fn of(items: &[T], page: usize) -> Self {
        Self {
            items: paginate(items, page, QUESTIONS_PER_PAGE).to_vec(),
            total_count: items.len(),
        }
    }
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}
